//! base64url text representation of binary fields
//!
//! Decoded records carry every binary field as padded URL-safe base64 so that
//! the metadata and blob stores receive plain text.

use base64::{engine::general_purpose::URL_SAFE as BASE64URL, Engine};

/// Encode bytes as padded base64url.
pub fn to_base64url(bytes: &[u8]) -> String {
    BASE64URL.encode(bytes)
}

/// Decode padded base64url text back to bytes.
pub fn from_base64url(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    BASE64URL.decode(text)
}
