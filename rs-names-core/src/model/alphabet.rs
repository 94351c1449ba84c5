use rand::Rng;

/// Consonants usable as a single-letter unit.
pub const SINGLE_CONSONANTS: [&str; 21] = [
	"b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n",
	"p", "q", "r", "s", "t", "v", "w", "x", "y", "z",
];

/// Two-letter consonant digraphs.
///
/// Never appended inside the last two characters of a name.
pub const CONSONANT_BLENDS: [&str; 20] = [
	"bl", "ch", "sh", "ph", "st", "tr", "cl", "fl", "gl", "pl",
	"sl", "br", "dr", "fr", "gr", "pr", "sk", "sm", "sn", "sp",
];

/// Vowels. `y` is also listed as a consonant.
pub const VOWELS: [&str; 6] = ["a", "e", "i", "o", "u", "y"];

/// Every unit a name may start with, in selection order.
///
/// The list is the plain concatenation of consonants, blends and vowels,
/// so `y` is twice as likely as any other single letter.
pub const ALL_UNITS: [&[&str]; 3] = [&SINGLE_CONSONANTS, &CONSONANT_BLENDS, &VOWELS];

/// Consonant units allowed while the name still has room for a blend.
pub(crate) const ALL_CONSONANTS: [&[&str]; 2] = [&SINGLE_CONSONANTS, &CONSONANT_BLENDS];

/// Returns `true` if the character closes a syllable as a vowel.
pub fn is_vowel(c: char) -> bool {
	matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Returns `true` if `unit` (case-insensitive) is a consonant, blend or vowel.
pub fn is_known_unit(unit: &str) -> bool {
	let unit = unit.to_lowercase();
	ALL_UNITS
		.iter()
		.any(|group| group.iter().any(|candidate| *candidate == unit))
}

/// Picks one unit uniformly over the concatenation of `groups`.
///
/// Each entry counts once, duplicates across groups included.
/// Returns an empty string only if every group is empty.
pub(crate) fn pick_unit<R: Rng + ?Sized>(rng: &mut R, groups: &[&[&'static str]]) -> &'static str {
	let total: usize = groups.iter().map(|group| group.len()).sum();
	if total == 0 {
		return "";
	}

	let mut r = rng.random_range(0..total);
	for group in groups {
		if r < group.len() {
			return group[r];
		}
		r -= group.len();
	}

	// Unreachable as r < total
	""
}
