//! Short public identifiers for threads.
//!
//! A slug is 4 characters drawn uniformly from `[a-z0-9]`. Not
//! cryptographically secure; collisions are handled by the caller
//! regenerating on a uniqueness conflict.

use rand::Rng;

use crate::constants::{SLUG_ALPHABET, SLUG_LENGTH};

/// Generate a fresh random slug.
pub fn generate_slug() -> String {
    let mut rng = rand::thread_rng();
    (0..SLUG_LENGTH)
        .map(|_| SLUG_ALPHABET[rng.gen_range(0..SLUG_ALPHABET.len())] as char)
        .collect()
}

/// Whether `s` has the shape of a slug: exactly [`SLUG_LENGTH`] lowercase
/// alphanumeric characters.
pub fn is_valid_slug(s: &str) -> bool {
    s.len() == SLUG_LENGTH && s.bytes().all(|b| SLUG_ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_has_expected_length() {
        assert_eq!(generate_slug().len(), SLUG_LENGTH);
    }

    #[test]
    fn slug_stays_in_alphabet() {
        for _ in 0..100 {
            let slug = generate_slug();
            assert!(is_valid_slug(&slug), "unexpected slug: {slug}");
        }
    }

    #[test]
    fn validation_rejects_bad_shapes() {
        assert!(is_valid_slug("a1b2"));
        assert!(!is_valid_slug("a1b"));
        assert!(!is_valid_slug("a1b2c"));
        assert!(!is_valid_slug("A1b2"));
        assert!(!is_valid_slug("a-b2"));
        assert!(!is_valid_slug(""));
    }
}
