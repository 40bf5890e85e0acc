//! Shared helpers for building wire bytes in integration tests

#![allow(dead_code)]

use apache_avro::types::Value as AvroValue;
use apache_avro::Schema;
use bungo_core::signature::lookup;
use bungo_core::Tag;
use bungo_format::tags::TAG_SCHEMA;

/// Avro-encode tags as a bare datum
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

/// Data item bytes with deterministic signature/owner filler
pub fn item_bytes(
    signature_type: u16,
    target: Option<[u8; 32]>,
    anchor: Option<[u8; 32]>,
    tags: &[Tag],
    payload: &[u8],
) -> Vec<u8> {
    let info = lookup(signature_type).unwrap();
    let mut buf = signature_type.to_le_bytes().to_vec();
    buf.extend((0..info.signature_length).map(|i| i as u8));
    buf.extend((0..info.public_key_length).map(|i| (i as u8).wrapping_mul(3)));
    for field in [target, anchor] {
        match field {
            Some(bytes) => {
                buf.push(1);
                buf.extend_from_slice(&bytes);
            }
            None => buf.push(0),
        }
    }
    buf.extend_from_slice(&(tags.len() as u64).to_le_bytes());
    if tags.is_empty() {
        buf.extend_from_slice(&0u64.to_le_bytes());
    } else {
        let payload = encode_tags(tags);
        buf.extend_from_slice(&(payload.len() as u64).to_le_bytes());
        buf.extend_from_slice(&payload);
    }
    buf.extend_from_slice(payload);
    buf
}

/// Minimal item: no target, anchor, tags or payload
pub fn minimal_item(signature_type: u16) -> Vec<u8> {
    item_bytes(signature_type, None, None, &[], &[])
}

/// Zigzag varint encoding of an Avro `long`
pub fn avro_long(value: i64) -> Vec<u8> {
    let mut raw = ((value << 1) ^ (value >> 63)) as u64;
    let mut out = Vec::new();
    while raw >= 0x80 {
        out.push((raw as u8) | 0x80);
        raw >>= 7;
    }
    out.push(raw as u8);
    out
}

/// Ed25519 item with a hand-built tag region and no payload
pub fn item_with_tag_region(declared: u64, tag_payload: &[u8]) -> Vec<u8> {
    let mut buf = minimal_item(bungo_core::signature::codes::ED25519);
    buf.truncate(buf.len() - 16);
    buf.extend_from_slice(&declared.to_le_bytes());
    buf.extend_from_slice(&(tag_payload.len() as u64).to_le_bytes());
    buf.extend_from_slice(tag_payload);
    buf
}

/// 32-byte little-endian slot
pub fn u256_slot(value: usize) -> [u8; 32] {
    let mut slot = [0u8; 32];
    slot[..8].copy_from_slice(&(value as u64).to_le_bytes());
    slot
}

/// Bundle bytes: count, header table with ids 0..N, then the items
pub fn bundle_bytes(items: &[Vec<u8>]) -> Vec<u8> {
    let mut buf = u256_slot(items.len()).to_vec();
    for (id, item) in items.iter().enumerate() {
        buf.extend_from_slice(&u256_slot(item.len()));
        buf.extend_from_slice(&u256_slot(id));
    }
    for item in items {
        buf.extend_from_slice(item);
    }
    buf
}
