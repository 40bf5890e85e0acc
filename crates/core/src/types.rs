//! Decoded bundle records
//!
//! These are the structured forms handed to callers once decoding succeeds.
//! Binary fields are carried as base64url text (see [`crate::encoding`]).

use crate::encoding::from_base64url;
use serde::{Deserialize, Serialize};

/// Name/value pair attached to a data item. Order within an item is significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name
    pub name: String,
    /// Tag value
    pub value: String,
}

impl Tag {
    /// Create a tag
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A fully decoded data item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataItem {
    /// Signature scheme code
    pub signature_type: u16,
    /// Signature bytes, base64url
    pub signature: String,
    /// Owner public key, base64url
    pub owner: String,
    /// 32-byte target, base64url, present only when its flag byte is 1
    pub target: Option<String>,
    /// 32-byte anchor, base64url, present only when its flag byte is 1
    pub anchor: Option<String>,
    /// Tags in wire order
    pub tags: Vec<Tag>,
    /// Payload bytes, base64url
    pub raw_data: String,
}

impl DataItem {
    /// Value of the first tag with the given name
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.value.as_str())
    }

    /// Whether the item names a target
    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    /// Whether the item carries an anchor
    pub fn has_anchor(&self) -> bool {
        self.anchor.is_some()
    }

    /// Payload as raw bytes
    pub fn payload_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        from_base64url(&self.raw_data)
    }
}

/// A decoded bundle
///
/// `raw_data` keeps the complete original blob so items can be re-verified
/// against it later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    /// Items in header-table order
    pub items: Vec<DataItem>,
    /// The whole bundle blob, base64url
    pub raw_data: String,
}

impl Bundle {
    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the bundle holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate items in wire order
    pub fn iter(&self) -> std::slice::Iter<'_, DataItem> {
        self.items.iter()
    }

    /// The original bundle blob as raw bytes
    pub fn raw_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        from_base64url(&self.raw_data)
    }
}

impl<'a> IntoIterator for &'a Bundle {
    type Item = &'a DataItem;
    type IntoIter = std::slice::Iter<'a, DataItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
