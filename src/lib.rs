//! Bungo - decoding engine for ANS-104 bundled transactions
//!
//! A bundle packs many independently signed data items into one blob so they
//! can be posted to Arweave as a single transaction. This crate recovers the
//! items, their signature metadata, tags and payloads from untrusted bytes.
//!
//! # Quick Start
//!
//! ```ignore
//! use bungo::{decode_bundle, decode_data_item};
//!
//! let bundle = decode_bundle(&bytes)?;
//! for item in bundle.iter() {
//!     println!("{} tags, owner {}", item.tags.len(), item.owner);
//! }
//! ```
//!
//! # Architecture
//!
//! - [`bungo_core`]: data model, error taxonomy and the signature registry
//! - [`bungo_format`]: the cursor and the tag, data item and bundle decoders

pub use bungo_core::*;
pub use bungo_format::*;
