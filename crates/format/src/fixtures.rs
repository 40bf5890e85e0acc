//! Wire-format builders for unit tests

use crate::tags::TAG_SCHEMA;
use apache_avro::types::Value as AvroValue;
use apache_avro::Schema;
use bungo_core::signature::lookup;
use bungo_core::Tag;

/// Avro-encode tags as a bare datum.
pub fn encode_tags(tags: &[Tag]) -> Vec<u8> {
    let schema = Schema::parse_str(TAG_SCHEMA).unwrap();
    let records = tags
        .iter()
        .map(|t| {
            AvroValue::Record(vec![
                ("name".to_string(), AvroValue::Bytes(t.name.as_bytes().to_vec())),
                ("value".to_string(), AvroValue::Bytes(t.value.as_bytes().to_vec())),
            ])
        })
        .collect();
    apache_avro::to_avro_datum(&schema, AvroValue::Array(records)).unwrap()
}

/// Count field, length field and payload for a tag list.
pub fn tag_region(tags: &[Tag]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&(tags.len() as u64).to_le_bytes());
    if tags.is_empty() {
        buf.extend_from_slice(&0u64.to_le_bytes());
        return buf;
    }
    let payload = encode_tags(tags);
    buf.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    buf.extend_from_slice(&payload);
    buf
}

/// Builds data item bytes.
pub struct ItemBuilder {
    pub signature_type: u16,
    pub target: Option<[u8; 32]>,
    pub anchor: Option<[u8; 32]>,
    pub tags: Vec<Tag>,
    pub payload: Vec<u8>,
}

impl ItemBuilder {
    pub fn new(signature_type: u16) -> Self {
        ItemBuilder {
            signature_type,
            target: None,
            anchor: None,
            tags: Vec::new(),
            payload: Vec::new(),
        }
    }

    pub fn target(mut self, target: [u8; 32]) -> Self {
        self.target = Some(target);
        self
    }

    pub fn anchor(mut self, anchor: [u8; 32]) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn payload(mut self, payload: &[u8]) -> Self {
        self.payload = payload.to_vec();
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let info = lookup(self.signature_type).unwrap();
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.signature_type.to_le_bytes());
        buf.extend(std::iter::repeat(0xAA).take(info.signature_length));
        buf.extend(std::iter::repeat(0xBB).take(info.public_key_length));
        for field in [self.target, self.anchor] {
            match field {
                Some(bytes) => {
                    buf.push(1);
                    buf.extend_from_slice(&bytes);
                }
                None => buf.push(0),
            }
        }
        buf.extend_from_slice(&tag_region(&self.tags));
        buf.extend_from_slice(&self.payload);
        buf
    }
}

/// A 32-byte little-endian slot.
pub fn u256_slot(value: usize) -> [u8; 32] {
    let mut slot = [0u8; 32];
    slot[..8].copy_from_slice(&(value as u64).to_le_bytes());
    slot
}

/// Bundle bytes for the given item buffers, ids numbered from zero.
pub fn build_bundle(items: &[Vec<u8>]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&u256_slot(items.len()));
    for (id, item) in items.iter().enumerate() {
        buf.extend_from_slice(&u256_slot(item.len()));
        buf.extend_from_slice(&u256_slot(id));
    }
    for item in items {
        buf.extend_from_slice(item);
    }
    buf
}
