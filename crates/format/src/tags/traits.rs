//! Tag payload decoder trait definitions.

use bungo_core::{DecodeResult, Tag};

/// Tag payload decoder trait.
///
/// The tag region of a data item embeds a separately encoded list of
/// name/value records. Implementations turn exactly that payload into tags;
/// the surrounding count and length fields are handled by
/// [`decode_tags`](super::decode_tags).
///
/// # Thread Safety
///
/// Decoders must be `Send + Sync` so one decoder can serve concurrent decode
/// calls.
pub trait TagPayloadDecoder: Send + Sync {
    /// Decode a complete tag payload into tags, in record order.
    ///
    /// Returns `DecodeError::TagPayloadDecodeError` if the payload is
    /// malformed, holds text that is not UTF-8, or is not entirely consumed.
    fn decode_tag_payload(&self, bytes: &[u8]) -> DecodeResult<Vec<Tag>>;

    /// Schema identifier, as used in `DecoderConfig::tag_schema`.
    fn schema_id(&self) -> &str;
}
