//! Bundle decoding
//!
//! # Bundle Layout
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │ Item count N (32 bytes LE)         │
//! ├────────────────────────────────────┤
//! │ Header 0: size (32 LE) │ id (32)   │
//! ├────────────────────────────────────┤
//! │ ...                                │
//! ├────────────────────────────────────┤
//! │ Header N-1                         │
//! ├────────────────────────────────────┤
//! │ Item 0 (size_0 bytes)              │
//! ├────────────────────────────────────┤
//! │ ...                                │
//! └────────────────────────────────────┘
//! ```
//!
//! Decoding is all-or-nothing: the first item that cannot be sliced or
//! decoded fails the whole bundle.

use crate::config::DecodeLimits;
use crate::cursor::{Cursor, U256_SLOT};
use crate::data_item::decode_data_item_with;
use crate::tags::TagPayloadDecoder;
use bungo_core::{to_base64url, Bundle, DecodeError, DecodeResult};
use tracing::{debug, trace};

/// Minimum bundle length: the item count slot
pub const MIN_BUNDLE_LEN: usize = U256_SLOT;

/// Size of one header table record
pub const HEADER_RECORD_LEN: usize = 2 * U256_SLOT;

/// Header table record locating one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BundleItemHeader {
    pub(crate) id: [u8; 32],
    pub(crate) size: usize,
}

/// Read the item count and header table, leaving the cursor at the first item.
pub(crate) fn decode_bundle_headers(
    cursor: &mut Cursor<'_>,
    limits: &DecodeLimits,
) -> DecodeResult<Vec<BundleItemHeader>> {
    let count = cursor.read_u256_le("item_count")?;
    limits.check_bundle_items(count)?;

    // Bound the allocation by the buffer before trusting the count
    let table_len = count
        .checked_mul(HEADER_RECORD_LEN)
        .ok_or(DecodeError::LengthOverflow {
            field: "header_table",
            offset: cursor.position(),
        })?;
    let mut table = Cursor::new(cursor.take(table_len, "header_table")?);

    let mut headers = Vec::with_capacity(count);
    for _ in 0..count {
        let size = table.read_u256_le("item_size")?;
        let mut id = [0u8; 32];
        id.copy_from_slice(table.take(U256_SLOT, "item_id")?);
        headers.push(BundleItemHeader { id, size });
    }
    Ok(headers)
}

/// Decode a bundle from `buffer`.
pub fn decode_bundle_with(
    buffer: &[u8],
    tag_decoder: &dyn TagPayloadDecoder,
    limits: &DecodeLimits,
) -> DecodeResult<Bundle> {
    if buffer.len() < MIN_BUNDLE_LEN {
        return Err(DecodeError::BufferTooSmall {
            field: "item_count",
            offset: 0,
            needed: MIN_BUNDLE_LEN,
            available: buffer.len(),
        });
    }

    let mut cursor = Cursor::new(buffer);
    let headers = decode_bundle_headers(&mut cursor, limits)?;
    debug!(target: "bungo::bundle", len = buffer.len(), item_count = headers.len(), "Decoding bundle");

    let mut items = Vec::with_capacity(headers.len());
    for (index, header) in headers.iter().enumerate() {
        let offset = cursor.position();
        let item = cursor
            .take(header.size, "item")
            .and_then(|slice| decode_data_item_with(slice, tag_decoder, limits))
            .map_err(|e| {
                debug!(target: "bungo::bundle", index, offset, size = header.size, error = %e, "Bundle item failed to decode");
                e.in_item(index)
            })?;
        trace!(target: "bungo::bundle", index, offset, size = header.size, id = %to_base64url(&header.id), "Decoded bundle item");
        items.push(item);
    }

    if cursor.remaining() > 0 {
        debug!(target: "bungo::bundle", trailing = cursor.remaining(), "Ignoring bytes after last bundle item");
    }
    debug!(target: "bungo::bundle", item_count = items.len(), "Bundle decoded");

    Ok(Bundle {
        items,
        raw_data: to_base64url(buffer),
    })
}
