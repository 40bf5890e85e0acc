//! Avro tag payload decoder
//!
//! ANS-104 encodes tags as a bare Avro datum (no container header) of this
//! schema:
//!
//! ```text
//! array<record Tag { name: bytes, value: bytes }>
//! ```

use super::traits::TagPayloadDecoder;
use apache_avro::types::Value as AvroValue;
use apache_avro::Schema;
use bungo_core::{DecodeError, DecodeResult, Tag};
use once_cell::sync::Lazy;

/// Identifier of the Avro tag schema
pub const AVRO_SCHEMA_ID: &str = "avro";

/// The Avro schema for a tag payload.
pub const TAG_SCHEMA: &str = r#"{
  "type": "array",
  "items": {
    "type": "record",
    "name": "Tag",
    "fields": [
      {"name": "name", "type": "bytes"},
      {"name": "value", "type": "bytes"}
    ]
  }
}"#;

static PARSED_TAG_SCHEMA: Lazy<Result<Schema, String>> =
    Lazy::new(|| Schema::parse_str(TAG_SCHEMA).map_err(|e| e.to_string()));

/// Decodes Avro-encoded tag payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvroTagDecoder;

impl TagPayloadDecoder for AvroTagDecoder {
    fn decode_tag_payload(&self, bytes: &[u8]) -> DecodeResult<Vec<Tag>> {
        let schema = PARSED_TAG_SCHEMA
            .as_ref()
            .map_err(|e| DecodeError::tag_payload(format!("invalid tag schema: {}", e)))?;

        // apache-avro reserves array capacity from the block count on the wire
        check_array_blocks(bytes)?;

        let mut reader = bytes;
        let value = apache_avro::from_avro_datum(schema, &mut reader, None)
            .map_err(|e| DecodeError::tag_payload(e.to_string()))?;
        if !reader.is_empty() {
            return Err(DecodeError::tag_payload(format!(
                "{} trailing bytes after tag array",
                reader.len()
            )));
        }

        let records = match value {
            AvroValue::Array(records) => records,
            _ => return Err(DecodeError::tag_payload("expected Avro array of tags")),
        };

        records.into_iter().map(parse_tag_record).collect()
    }

    fn schema_id(&self) -> &str {
        AVRO_SCHEMA_ID
    }
}

/// Walk the array's block framing without materializing any records.
///
/// Each record holds two length-prefixed byte fields, so a block can never
/// declare more records than half the bytes left after its count.
fn check_array_blocks(bytes: &[u8]) -> DecodeResult<()> {
    let mut pos = 0;
    loop {
        let count = read_long(bytes, &mut pos)?;
        if count == 0 {
            return Ok(());
        }
        if count < 0 {
            // Negative counts carry the block's byte size next
            let block_size = read_long(bytes, &mut pos)?;
            if block_size < 0 {
                return Err(DecodeError::tag_payload(format!(
                    "negative Avro block size {}",
                    block_size
                )));
            }
        }

        let records = count.unsigned_abs();
        let remaining = (bytes.len() - pos) as u64;
        if records > remaining / 2 {
            return Err(DecodeError::tag_payload(format!(
                "Avro block of {} tags exceeds {} remaining payload bytes",
                records, remaining
            )));
        }
        for _ in 0..records {
            skip_bytes_field(bytes, &mut pos)?;
            skip_bytes_field(bytes, &mut pos)?;
        }
    }
}

/// Skip one length-prefixed Avro `bytes` value.
fn skip_bytes_field(bytes: &[u8], pos: &mut usize) -> DecodeResult<()> {
    let len = read_long(bytes, pos)?;
    let remaining = bytes.len() - *pos;
    match usize::try_from(len) {
        Ok(len) if len <= remaining => {
            *pos += len;
            Ok(())
        }
        _ => Err(DecodeError::tag_payload(format!(
            "Avro bytes length {} exceeds {} remaining payload bytes",
            len, remaining
        ))),
    }
}

/// Read one zigzag varint Avro `long`.
fn read_long(bytes: &[u8], pos: &mut usize) -> DecodeResult<i64> {
    let mut raw: u64 = 0;
    for shift in (0..64).step_by(7) {
        let byte = *bytes
            .get(*pos)
            .ok_or_else(|| DecodeError::tag_payload("truncated Avro long"))?;
        *pos += 1;
        raw |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            return Ok((raw >> 1) as i64 ^ -((raw & 1) as i64));
        }
    }
    Err(DecodeError::tag_payload("Avro long longer than 10 bytes"))
}

/// Convert one Avro `Tag` record.
fn parse_tag_record(record: AvroValue) -> DecodeResult<Tag> {
    let fields = match record {
        AvroValue::Record(fields) => fields,
        _ => return Err(DecodeError::tag_payload("expected Avro record for tag")),
    };

    let mut name = None;
    let mut value = None;
    for (field, field_value) in fields {
        match (field.as_str(), field_value) {
            ("name", AvroValue::Bytes(b)) => name = Some(b),
            ("value", AvroValue::Bytes(b)) => value = Some(b),
            _ => {}
        }
    }

    Ok(Tag {
        name: tag_text("name", name)?,
        value: tag_text("value", value)?,
    })
}

/// Tag text is the field's bytes as strict UTF-8, so its length is the wire length.
fn tag_text(field: &str, bytes: Option<Vec<u8>>) -> DecodeResult<String> {
    let bytes = bytes
        .ok_or_else(|| DecodeError::tag_payload(format!("missing or invalid tag {}", field)))?;
    String::from_utf8(bytes)
        .map_err(|e| DecodeError::tag_payload(format!("tag {} is not valid UTF-8: {}", field, e)))
}
