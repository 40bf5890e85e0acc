//! Wire-format decoding for ANS-104 bundles
//!
//! This crate turns untrusted bytes into [`Bundle`](bungo_core::Bundle) and
//! [`DataItem`](bungo_core::DataItem) records:
//!
//! - Cursor: bounds-checked forward reads, the only place buffers are indexed
//! - Tags: tag region framing and the pluggable tag payload decoder (Avro)
//! - Data items: signature, owner, optional target/anchor, tags, payload
//! - Bundles: item count, header table and per-item slicing
//! - Config: decode limits and tag schema selection
//!
//! Decoding is synchronous and allocation-bounded by the input; there is no
//! I/O and no shared mutable state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bundle;
pub mod config;
pub mod cursor;
pub mod data_item;
pub mod decoder;
pub mod tags;

#[cfg(test)]
mod fixtures;

pub use bundle::{decode_bundle_with, HEADER_RECORD_LEN, MIN_BUNDLE_LEN};
pub use config::{ConfigError, DecodeLimits, DecoderConfig};
pub use cursor::Cursor;
pub use data_item::decode_data_item_with;
pub use decoder::{decode_bundle, decode_data_item, Decoder};
pub use tags::{decode_tags, get_tag_decoder, AvroTagDecoder, TagPayloadDecoder, AVRO_SCHEMA_ID};
