use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::alphabet::{self, ALL_CONSONANTS, ALL_UNITS, SINGLE_CONSONANTS, VOWELS};
use super::seed::SeedOutcome;

/// Lengths drawn when the caller does not ask for one.
pub const DEFAULT_LENGTHS: [usize; 6] = [3, 4, 5, 6, 7, 8];

/// Relative weight of each entry of `DEFAULT_LENGTHS`.
pub const DEFAULT_LENGTH_WEIGHTS: [usize; 6] = [1, 3, 3, 3, 2, 1];

/// Pronounceable name generator.
///
/// Names alternate vowels and consonant units (single consonants or
/// two-letter blends), starting from an optional caller-supplied unit.
///
/// # Responsibilities
/// - Draw a target length (weighted) when none is requested
/// - Resolve the first letter, falling back to a random unit if unknown
/// - Grow the name until it reaches the target length
///
/// # Invariants
/// - The random source is owned, so two generators never share state
/// - Output is never empty, starts uppercase and continues lowercase
#[derive(Debug, Clone)]
pub struct Generator<R: Rng = StdRng> {
	rng: R,
}

impl Default for Generator<StdRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl Generator<StdRng> {
	/// Creates a generator seeded from the operating system.
	pub fn new() -> Self {
		Self::from_rng(StdRng::from_os_rng())
	}

	/// Creates a deterministic generator: same seed, same names.
	pub fn seeded(seed: u64) -> Self {
		Self::from_rng(StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> Generator<R> {
	/// Creates a generator drawing from the given random source.
	pub fn from_rng(rng: R) -> Self {
		Self { rng }
	}

	/// Returns the requested length, or a weighted draw if absent or zero.
	///
	/// The weighted draw follows `DEFAULT_LENGTH_WEIGHTS`: a cumulative
	/// subtraction over the weights selects the bucket.
	pub fn target_length(&mut self, length: Option<usize>) -> usize {
		if let Some(length) = length.filter(|length| *length > 0) {
			return length;
		}

		let total: usize = DEFAULT_LENGTH_WEIGHTS.iter().sum();
		let mut r = self.rng.random_range(0..total);
		for (length, weight) in DEFAULT_LENGTHS.iter().zip(DEFAULT_LENGTH_WEIGHTS) {
			if r < weight {
				return *length;
			}
			r -= weight;
		}

		// Unreachable as r < total
		DEFAULT_LENGTHS[DEFAULT_LENGTHS.len() - 1]
	}

	/// Resolves the optional first letter into the starting unit.
	///
	/// - `None` or an empty string draws a random unit.
	/// - A known unit (case-insensitive) is kept, lowercased.
	/// - Anything else is rejected and replaced by a random unit.
	pub fn resolve_seed(&mut self, first_letter: Option<&str>) -> SeedOutcome {
		match first_letter.filter(|letter| !letter.is_empty()) {
			None => SeedOutcome::Random(alphabet::pick_unit(&mut self.rng, &ALL_UNITS)),
			Some(letter) if alphabet::is_known_unit(letter) => SeedOutcome::Provided(letter.to_lowercase()),
			Some(letter) => {
				let unit = alphabet::pick_unit(&mut self.rng, &ALL_UNITS);
				warn!("Invalid first letter '{letter}', using random unit '{unit}'");
				SeedOutcome::Fallback { rejected: letter.to_owned(), unit }
			}
		}
	}

	/// Generates a capitalized, pronounceable name.
	///
	/// # Parameters
	/// - `length`: target number of characters; a weighted draw if `None` or 0.
	/// - `first_letter`: unit the name must start with (see `resolve_seed`).
	///
	/// # Behavior
	/// - After a vowel, appends a consonant unit. Blends are only allowed
	///   while at least three characters are missing.
	/// - After a consonant, appends one vowel.
	/// - Stops once the character count reaches the target.
	///
	/// # Notes
	/// - A two-letter seed longer than the target overshoots by one
	///   character: `len` is always `length` or `length + 1`.
	pub fn generate(&mut self, length: Option<usize>, first_letter: Option<&str>) -> String {
		let target = self.target_length(length);
		let seed = self.resolve_seed(first_letter);

		let mut name = seed.unit().to_owned();
		let mut count = name.chars().count();

		while count < target {
			let ends_with_vowel = name.chars().last().is_some_and(alphabet::is_vowel);
			let unit = if !ends_with_vowel {
				alphabet::pick_unit(&mut self.rng, &[&VOWELS])
			} else if count + 2 < target {
				alphabet::pick_unit(&mut self.rng, &ALL_CONSONANTS)
			} else {
				alphabet::pick_unit(&mut self.rng, &[&SINGLE_CONSONANTS])
			};
			name.push_str(unit);
			count += unit.chars().count();
		}

		let name = capitalize(&name);
		debug!("Generated '{name}' (target length {target})");
		name
	}
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
		None => String::new(),
	}
}
