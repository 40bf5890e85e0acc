//! Decoder configuration
//!
//! Limits bound how much work a single untrusted buffer can request before
//! decoding gives up. The tag schema selects the nested tag payload decoder.

use crate::tags::{get_tag_decoder, AVRO_SCHEMA_ID};
use bungo_core::{DecodeError, DecodeResult};

/// Decode-time limits
///
/// Violations fail with `DecodeError::LimitExceeded`. The default imposes
/// nothing beyond the buffer's own bounds; see [`DecodeLimits::ans104`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum items declared by a bundle header
    pub max_bundle_items: usize,

    /// Maximum tags on one data item
    pub max_tags: usize,

    /// Maximum tag name length in bytes
    pub max_tag_name_bytes: usize,

    /// Maximum tag value length in bytes
    pub max_tag_value_bytes: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl DecodeLimits {
    /// No limits beyond the buffer's own bounds
    pub fn unbounded() -> Self {
        DecodeLimits {
            max_bundle_items: usize::MAX,
            max_tags: usize::MAX,
            max_tag_name_bytes: usize::MAX,
            max_tag_value_bytes: usize::MAX,
        }
    }

    /// ANS-104 tag rules: 128 tags, 1024-byte names, 3072-byte values,
    /// and at most 1M items per bundle
    pub fn ans104() -> Self {
        DecodeLimits {
            max_bundle_items: 1_000_000,
            max_tags: 128,
            max_tag_name_bytes: 1024,
            max_tag_value_bytes: 3072,
        }
    }

    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        DecodeLimits {
            max_bundle_items: 8,
            max_tags: 4,
            max_tag_name_bytes: 16,
            max_tag_value_bytes: 32,
        }
    }

    /// Check a declared bundle item count
    pub fn check_bundle_items(&self, count: usize) -> DecodeResult<()> {
        check("bundle_items", count, self.max_bundle_items)
    }

    /// Check a declared tag count
    pub fn check_tags(&self, count: usize) -> DecodeResult<()> {
        check("tags", count, self.max_tags)
    }

    /// Check one tag's name and value lengths
    pub fn check_tag(&self, name: &[u8], value: &[u8]) -> DecodeResult<()> {
        check("tag_name_bytes", name.len(), self.max_tag_name_bytes)?;
        check("tag_value_bytes", value.len(), self.max_tag_value_bytes)
    }
}

fn check(what: &'static str, actual: usize, max: usize) -> DecodeResult<()> {
    if actual > max {
        return Err(DecodeError::LimitExceeded { what, actual, max });
    }
    Ok(())
}

/// Decoder configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Decode-time limits
    pub limits: DecodeLimits,
    /// Tag payload schema identifier (default: "avro")
    pub tag_schema: String,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            limits: DecodeLimits::default(),
            tag_schema: AVRO_SCHEMA_ID.to_string(),
        }
    }
}

impl DecoderConfig {
    /// Create config that enforces the ANS-104 limits
    pub fn strict() -> Self {
        DecoderConfig {
            limits: DecodeLimits::ans104(),
            ..Default::default()
        }
    }

    /// Create config that accepts anything the buffer bounds allow
    pub fn permissive() -> Self {
        DecoderConfig {
            limits: DecodeLimits::unbounded(),
            ..Default::default()
        }
    }

    /// Create config for testing
    ///
    /// Uses small limits so enforcement can be tested with tiny buffers.
    pub fn for_testing() -> Self {
        DecoderConfig {
            limits: DecodeLimits::with_small_limits(),
            ..Default::default()
        }
    }

    /// Set all limits
    pub fn with_limits(mut self, limits: DecodeLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set maximum tags per item
    pub fn with_max_tags(mut self, max: usize) -> Self {
        self.limits.max_tags = max;
        self
    }

    /// Set maximum items per bundle
    pub fn with_max_bundle_items(mut self, max: usize) -> Self {
        self.limits.max_bundle_items = max;
        self
    }

    /// Set tag schema identifier
    pub fn with_tag_schema(mut self, schema_id: impl Into<String>) -> Self {
        self.tag_schema = schema_id.into();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_limits()?;
        get_tag_decoder(&self.tag_schema)?;
        Ok(())
    }

    /// Validate limits only, ignoring the tag schema
    pub fn validate_limits(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        for (name, value) in [
            ("max_bundle_items", limits.max_bundle_items),
            ("max_tags", limits.max_tags),
            ("max_tag_name_bytes", limits.max_tag_name_bytes),
            ("max_tag_value_bytes", limits.max_tag_value_bytes),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroLimit(name));
            }
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A limit was set to zero
    #[error("Limit {0} must be greater than zero")]
    ZeroLimit(&'static str),

    /// Unknown tag schema identifier
    #[error("Unknown tag schema: {0}")]
    UnknownTagSchema(String),
}
