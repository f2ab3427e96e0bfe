/// FNV-1a offset basis (32-bit).
const OFFSET: u32 = 2_166_136_261;

/// FNV-1a prime (32-bit).
const PRIME: u32 = 16_777_619;

/// Hashes a word to its 16-bit bucket key.
///
/// Runs 32-bit FNV-1a over the word's bytes, then XOR-folds the high and
/// low halves of the result down to 16 bits.
///
/// # Notes
/// - Deterministic: the same word always maps to the same key.
/// - `word` must be non-empty; callers validate before hashing.
#[inline]
pub(crate) fn hash16(word: &str) -> u16 {
	debug_assert!(!word.is_empty(), "cannot hash an empty word");

	let mut hash = OFFSET;
	for byte in word.bytes() {
		hash ^= u32::from(byte);
		hash = hash.wrapping_mul(PRIME);
	}
	((hash >> 16) ^ (hash & 0xFFFF)) as u16
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hash_is_deterministic() {
		assert_eq!(hash16("abc"), hash16("abc"));
		assert_eq!(hash16("sentence"), hash16("sentence"));
	}

	// Folded forms of the published 32-bit FNV-1a vectors:
	// fnv1a("a") = 0xe40c292c, fnv1a("foobar") = 0xbf9cf968.
	#[test]
	fn matches_published_vectors() {
		assert_eq!(hash16("a"), 0xe40c ^ 0x292c);
		assert_eq!(hash16("foobar"), 0xbf9c ^ 0xf968);
	}

	#[test]
	fn stable_across_calls() {
		let first: Vec<u16> = ["the", "cat", "sat", "didn't", "well-known"]
			.iter()
			.map(|w| hash16(w))
			.collect();
		let second: Vec<u16> = ["the", "cat", "sat", "didn't", "well-known"]
			.iter()
			.map(|w| hash16(w))
			.collect();
		assert_eq!(first, second);
	}
}
