//! Data item decoding
//!
//! # Data Item Layout
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────────┬─────────────────────┬─────────────────────┐
//! │ SigType (2)  │ Signature    │ Owner        │ Target flag (1)     │ Anchor flag (1)     │
//! │ LE           │ (per type)   │ (per type)   │ + 32 bytes if 1     │ + 32 bytes if 1     │
//! └──────────────┴──────────────┴──────────────┴─────────────────────┴─────────────────────┘
//! ┌──────────────────┬────────────────────┬──────────────┬──────────────────────────────────┐
//! │ Tag count (8)    │ Tag bytes len (8)  │ Tag payload  │ Data (rest of buffer)            │
//! └──────────────────┴────────────────────┴──────────────┴──────────────────────────────────┘
//! ```
//!
//! Signature and owner widths come from the signature registry. The data has
//! no length field of its own: whatever follows the tag region is payload.

use crate::config::DecodeLimits;
use crate::cursor::Cursor;
use crate::tags::{decode_tags, TagPayloadDecoder};
use bungo_core::signature::lookup;
use bungo_core::{to_base64url, DataItem, DecodeResult};
use tracing::trace;

/// Length of the optional target and anchor fields
pub const OPTIONAL_FIELD_LEN: usize = 32;

/// Flag byte value marking an optional field as present
const PRESENT: u8 = 1;

/// Decode one data item from `buffer`.
pub fn decode_data_item_with(
    buffer: &[u8],
    tag_decoder: &dyn TagPayloadDecoder,
    limits: &DecodeLimits,
) -> DecodeResult<DataItem> {
    let mut cursor = Cursor::new(buffer);

    let signature_type = cursor.read_u16_le("signature_type")?;
    let info = lookup(signature_type)?;

    let signature = cursor.take(info.signature_length, "signature")?;
    let owner = cursor.take(info.public_key_length, "owner")?;
    let target = read_optional(&mut cursor, "target")?;
    let anchor = read_optional(&mut cursor, "anchor")?;
    let tags = decode_tags(&mut cursor, tag_decoder, limits)?;
    let data = cursor.rest();

    trace!(
        target: "bungo::data_item",
        signature_type,
        scheme = info.name,
        has_target = target.is_some(),
        has_anchor = anchor.is_some(),
        tag_count = tags.len(),
        payload_len = data.len(),
        "Decoded data item"
    );

    Ok(DataItem {
        signature_type,
        signature: to_base64url(signature),
        owner: to_base64url(owner),
        target: target.map(to_base64url),
        anchor: anchor.map(to_base64url),
        tags,
        raw_data: to_base64url(data),
    })
}

/// Read a flag byte and, when it marks the field present, the 32-byte value.
fn read_optional<'a>(
    cursor: &mut Cursor<'a>,
    field: &'static str,
) -> DecodeResult<Option<&'a [u8]>> {
    if cursor.read_u8(field)? != PRESENT {
        return Ok(None);
    }
    cursor.take(OPTIONAL_FIELD_LEN, field).map(Some)
}
