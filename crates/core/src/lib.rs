//! Core types for Bungo
//!
//! This crate defines the foundational types used by the decoders:
//! - Tag, DataItem, Bundle: decoded records
//! - SignatureTypeInfo and the signature registry
//! - DecodeError: the decode error taxonomy
//! - base64url helpers for the text representation of binary fields

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoding;
pub mod error;
pub mod signature;
pub mod types;

pub use encoding::{from_base64url, to_base64url};
pub use error::{DecodeError, DecodeResult};
pub use signature::{lookup as lookup_signature_type, registered_types, SignatureTypeInfo};
pub use types::{Bundle, DataItem, Tag};
