//! SHA-1 digest of raw fingerprints.

use crate::utils::config::DIGEST_HEX_LEN;
use sha1::{Digest, Sha1};

/// Hash a raw fingerprint to 40 lowercase hex characters
pub fn digest_hex(input: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Whether `value` has the shape of a digest produced by [`digest_hex`]
pub fn is_digest(value: &str) -> bool {
    value.len() == DIGEST_HEX_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(digest_hex("abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(digest_hex(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_is_digest() {
        assert!(is_digest(&digest_hex("anything")));
        assert!(!is_digest("A9993E364706816ABA3E25717850C26C9CD0D89D"));
        assert!(!is_digest("a9993e36"));
        assert!(!is_digest(""));
    }
}
