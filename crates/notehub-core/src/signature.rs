//! Request signatures for the Notehub API.
//!
//! The service authenticates writes with MD5 digests over concatenated
//! request fields, rendered as lowercase hex. There is no nonce or
//! timestamp, so the same inputs always produce the same signature.
//!
//! # Example
//!
//! ```
//! use notehub_core::Credentials;
//! use notehub_core::signature::{create_signature, md5_hex};
//!
//! let creds = Credentials::new("pid", "psk");
//! let sig = create_signature(&creds, "Test note 123.");
//!
//! assert_eq!(sig, md5_hex("pidpskTest note 123."));
//! assert_eq!(sig.len(), 32);
//! ```

use md5::{Digest, Md5};

use crate::types::{Credentials, NoteId};

/// MD5 digest of `input` as 32 lowercase hex characters.
pub fn md5_hex(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

/// Hashes a note password for transmission.
///
/// Passwords are never sent in plaintext.
pub fn encode_password(password: &str) -> String {
    md5_hex(password)
}

/// Signature for note creation: `md5(publisher_id + secret_key + text)`.
pub fn create_signature(credentials: &Credentials, text: &str) -> String {
    let mut full_text = String::with_capacity(
        credentials.publisher_id().len() + credentials.secret_key().len() + text.len(),
    );
    full_text.push_str(credentials.publisher_id());
    full_text.push_str(credentials.secret_key());
    full_text.push_str(text);
    md5_hex(&full_text)
}

/// Signature for note updates: `md5(note_id + text + encoded_password)`.
///
/// `encoded_password` is the output of [`encode_password`].
pub fn update_signature(note_id: &NoteId, text: &str, encoded_password: &str) -> String {
    md5_hex(&format!("{}{}{}", note_id, text, encoded_password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hex_known_vectors() {
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(
            md5_hex("The quick brown fox jumps over the lazy dog"),
            "9e107d9d372bb6826bd81d3542a419d6"
        );
    }

    #[test]
    fn test_md5_hex_is_lowercase() {
        let digest = md5_hex("Test note 123.");
        assert_eq!(digest.len(), 32);
        assert!(digest.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_encode_password() {
        assert_eq!(encode_password("abc123"), "e99a18c428cb38d5f260853678922e03");
    }

    #[test]
    fn test_create_signature_concatenation_order() {
        let creds = Credentials::new("my-pid", "my-psk");
        let sig = create_signature(&creds, "some test text");

        assert_eq!(sig, md5_hex("my-pidmy-psksome test text"));
        assert_ne!(sig, md5_hex("my-pskmy-pidsome test text"));
    }

    #[test]
    fn test_create_signature_depends_on_secret() {
        let a = create_signature(&Credentials::new("pid", "one"), "text");
        let b = create_signature(&Credentials::new("pid", "two"), "text");
        assert_ne!(a, b);
    }

    #[test]
    fn test_update_signature() {
        let note_id = NoteId::new("2014/1/18/test-7");
        let encoded = encode_password("abc123");
        let sig = update_signature(&note_id, "the new text", &encoded);

        assert_eq!(
            sig,
            md5_hex("2014/1/18/test-7the new texte99a18c428cb38d5f260853678922e03")
        );
    }

    #[test]
    fn test_signatures_are_deterministic() {
        let creds = Credentials::new("pid", "psk");
        assert_eq!(
            create_signature(&creds, "same"),
            create_signature(&creds, "same")
        );
    }
}
