//! Error types for bundle and data item decoding
//!
//! Every decode failure is terminal: the first malformed field aborts the
//! enclosing decode and is reported as a single `DecodeError`.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for decode operations
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Errors raised while decoding bundles, data items and tags
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer ended before a field could be read in full
    #[error("Buffer too small reading {field} at offset {offset}: need {needed} bytes, {available} available")]
    BufferTooSmall {
        /// Wire field being read
        field: &'static str,
        /// Cursor position when the read started
        offset: usize,
        /// Bytes the field requires
        needed: usize,
        /// Bytes left in the buffer
        available: usize,
    },

    /// No registry entry for the signature type code
    #[error("Unsupported signature type: {0}")]
    UnsupportedSignatureType(u16),

    /// Decoded tag count disagrees with the declared count
    #[error("Tag count mismatch: declared {declared}, decoded {decoded}")]
    TagCountMismatch {
        /// Count read from the tag-count field
        declared: usize,
        /// Records found in the tag payload
        decoded: usize,
    },

    /// The nested tag payload could not be decoded
    #[error("Tag payload decode error: {0}")]
    TagPayloadDecodeError(String),

    /// A length or count slot holds a value wider than `usize`
    #[error("Length overflow in {field} at offset {offset}")]
    LengthOverflow {
        /// Wire field being read
        field: &'static str,
        /// Cursor position of the slot
        offset: usize,
    },

    /// A configured decode limit was exceeded
    #[error("Limit exceeded for {what}: {actual} > {max}")]
    LimitExceeded {
        /// Limited quantity
        what: &'static str,
        /// Value found on the wire
        actual: usize,
        /// Configured maximum
        max: usize,
    },

    /// A bundle item failed to decode
    #[error("Bundle item {index}: {source}")]
    ItemDecode {
        /// Position of the item in the header table
        index: usize,
        /// Underlying failure
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Create a tag payload decode error
    pub fn tag_payload(msg: impl Into<String>) -> Self {
        Self::TagPayloadDecodeError(msg.into())
    }

    /// Wrap an item-level failure with its bundle position
    pub fn in_item(self, index: usize) -> Self {
        Self::ItemDecode {
            index,
            source: Box::new(self),
        }
    }

    /// The underlying failure, with any bundle context stripped
    pub fn root(&self) -> &DecodeError {
        match self {
            Self::ItemDecode { source, .. } => source.root(),
            other => other,
        }
    }

    /// Whether the root cause is a short buffer
    pub fn is_buffer_too_small(&self) -> bool {
        matches!(self.root(), Self::BufferTooSmall { .. })
    }
}
