/// Outcome of resolving the optional first letter of a name.
///
/// Keeping the three branches apart lets callers observe the silent
/// recovery on an unknown first letter instead of digging through logs.
///
/// # Variants
/// - `Provided(String)`: the caller's first letter is a known unit and is
///   used as-is (lowercased).
/// - `Fallback { rejected, unit }`: the caller's first letter is not a known
///   unit; `unit` was drawn at random in its place.
/// - `Random(&str)`: no first letter was requested; `unit` was drawn at random.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
	Provided(String),
	Fallback { rejected: String, unit: &'static str },
	Random(&'static str),
}

impl SeedOutcome {
	/// Returns the unit the name starts with.
	pub fn unit(&self) -> &str {
		match self {
			SeedOutcome::Provided(unit) => unit,
			SeedOutcome::Fallback { unit, .. } => unit,
			SeedOutcome::Random(unit) => unit,
		}
	}

	/// Returns `true` if the requested first letter was rejected.
	pub fn is_fallback(&self) -> bool {
		matches!(self, SeedOutcome::Fallback { .. })
	}
}
