//! Tag region decoding
//!
//! # Tag Region Layout
//!
//! ```text
//! ┌──────────────────┬────────────────────────┬──────────────────────────┐
//! │ Tag count (8 LE) │ Payload length (8 LE)  │ Tag payload (variable)   │
//! └──────────────────┴────────────────────────┴──────────────────────────┘
//! ```
//!
//! The payload is decoded by a [`TagPayloadDecoder`]; the count and length
//! fields are validated here.

mod avro;
mod traits;

pub use avro::{AvroTagDecoder, AVRO_SCHEMA_ID, TAG_SCHEMA};
pub use traits::TagPayloadDecoder;

use crate::config::{ConfigError, DecodeLimits};
use crate::cursor::Cursor;
use bungo_core::{DecodeError, DecodeResult, Tag};
use tracing::trace;

/// Get a tag payload decoder by schema identifier
pub fn get_tag_decoder(schema_id: &str) -> Result<Box<dyn TagPayloadDecoder>, ConfigError> {
    match schema_id {
        AVRO_SCHEMA_ID => Ok(Box::new(AvroTagDecoder)),
        _ => Err(ConfigError::UnknownTagSchema(schema_id.to_string())),
    }
}

/// Decode the tag region at the cursor, advancing past it.
///
/// A zero tag count consumes only the two length fields. Otherwise the
/// payload is decoded and must yield exactly the declared number of tags.
pub fn decode_tags(
    cursor: &mut Cursor<'_>,
    payload_decoder: &dyn TagPayloadDecoder,
    limits: &DecodeLimits,
) -> DecodeResult<Vec<Tag>> {
    let declared = cursor.read_len_u64("tag_count")?;
    let payload_len = cursor.read_len_u64("tag_bytes_len")?;

    if declared == 0 {
        return Ok(Vec::new());
    }
    limits.check_tags(declared)?;

    let payload = cursor.take(payload_len, "tag_bytes")?;
    let tags = payload_decoder.decode_tag_payload(payload)?;
    trace!(
        target: "bungo::tags",
        declared,
        payload_len,
        schema = payload_decoder.schema_id(),
        "Decoded tag payload"
    );

    if tags.len() != declared {
        return Err(DecodeError::TagCountMismatch {
            declared,
            decoded: tags.len(),
        });
    }
    // Tag text is strict UTF-8, so string lengths are wire byte lengths
    for tag in &tags {
        limits.check_tag(tag.name.as_bytes(), tag.value.as_bytes())?;
    }

    Ok(tags)
}
