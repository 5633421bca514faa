//! # Text Digest
//!
//! SHA-256 fingerprint of extracted document text. Recorded in run metadata
//! so two runs over identical input can be recognized without diffing text.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 digest of the UTF-8 bytes of `text`.
pub fn text_digest(text: &str) -> String {
    let hash = Sha256::digest(text.as_bytes());
    hash.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_vector() {
        assert_eq!(
            text_digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn digest_is_64_lowercase_hex() {
        let d = text_digest("REQ-CONF-001: Implement AES-256 encryption");
        assert_eq!(d.len(), 64);
        assert!(d.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn different_text_different_digest() {
        assert_ne!(text_digest("a"), text_digest("b"));
    }
}
