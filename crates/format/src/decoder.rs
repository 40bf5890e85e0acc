//! Configured decoder
//!
//! A [`Decoder`] pairs a [`DecoderConfig`] with its tag payload decoder so the
//! configuration is validated once and reused across calls. The free
//! functions [`decode_bundle`] and [`decode_data_item`] use a shared default
//! decoder, which enforces no limits beyond the buffer's bounds.

use crate::bundle::decode_bundle_with;
use crate::config::{ConfigError, DecoderConfig};
use crate::data_item::decode_data_item_with;
use crate::tags::{get_tag_decoder, AvroTagDecoder, TagPayloadDecoder};
use bungo_core::{Bundle, DataItem, DecodeResult};
use once_cell::sync::Lazy;

static DEFAULT_DECODER: Lazy<Decoder> = Lazy::new(Decoder::default);

/// Bundle and data item decoder
///
/// Holds no per-call state; one decoder can be shared across threads.
pub struct Decoder {
    config: DecoderConfig,
    tag_decoder: Box<dyn TagPayloadDecoder>,
}

impl Decoder {
    /// Create a decoder from a validated configuration
    pub fn new(config: DecoderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let tag_decoder = get_tag_decoder(&config.tag_schema)?;
        Ok(Decoder {
            config,
            tag_decoder,
        })
    }

    /// Create a decoder with a custom tag payload decoder
    ///
    /// The config's `tag_schema` is replaced by the decoder's schema id.
    pub fn with_tag_decoder(
        mut config: DecoderConfig,
        tag_decoder: Box<dyn TagPayloadDecoder>,
    ) -> Result<Self, ConfigError> {
        config.validate_limits()?;
        config.tag_schema = tag_decoder.schema_id().to_string();
        Ok(Decoder {
            config,
            tag_decoder,
        })
    }

    /// The decoder's configuration
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a bundle
    pub fn decode_bundle(&self, buffer: &[u8]) -> DecodeResult<Bundle> {
        decode_bundle_with(buffer, self.tag_decoder.as_ref(), &self.config.limits)
    }

    /// Decode a single data item
    pub fn decode_data_item(&self, buffer: &[u8]) -> DecodeResult<DataItem> {
        decode_data_item_with(buffer, self.tag_decoder.as_ref(), &self.config.limits)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder {
            config: DecoderConfig::default(),
            tag_decoder: Box::new(AvroTagDecoder),
        }
    }
}

impl std::fmt::Debug for Decoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoder")
            .field("config", &self.config)
            .field("tag_decoder", &self.tag_decoder.schema_id())
            .finish()
    }
}

/// Decode a bundle with the default decoder.
pub fn decode_bundle(buffer: &[u8]) -> DecodeResult<Bundle> {
    DEFAULT_DECODER.decode_bundle(buffer)
}

/// Decode a single data item with the default decoder.
pub fn decode_data_item(buffer: &[u8]) -> DecodeResult<DataItem> {
    DEFAULT_DECODER.decode_data_item(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{build_bundle, ItemBuilder};
    use bungo_core::signature::codes;
    use bungo_core::{DecodeError, Tag};

    struct FixedTags;

    impl TagPayloadDecoder for FixedTags {
        fn decode_tag_payload(&self, _bytes: &[u8]) -> DecodeResult<Vec<Tag>> {
            Ok(vec![Tag::new("fixed", "tag")])
        }

        fn schema_id(&self) -> &str {
            "fixed"
        }
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_decoder_is_send_sync() {
        assert_send_sync::<Decoder>();
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = Decoder::new(DecoderConfig::default().with_tag_schema("xml")).unwrap_err();
        assert_eq!(err, ConfigError::UnknownTagSchema("xml".to_string()));

        let err = Decoder::new(DecoderConfig::default().with_max_bundle_items(0)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroLimit("max_bundle_items"));
    }

    #[test]
    fn test_configured_limits_apply() {
        let decoder = Decoder::new(DecoderConfig::default().with_max_tags(1)).unwrap();
        let bytes = ItemBuilder::new(codes::ED25519)
            .tags(vec![Tag::new("a", "1"), Tag::new("b", "2")])
            .build();

        assert!(matches!(
            decoder.decode_data_item(&bytes),
            Err(DecodeError::LimitExceeded { what: "tags", .. })
        ));
        assert_eq!(decode_data_item(&bytes).unwrap().tags.len(), 2);
    }

    #[test]
    fn test_custom_tag_decoder() {
        let decoder =
            Decoder::with_tag_decoder(DecoderConfig::default(), Box::new(FixedTags)).unwrap();
        assert_eq!(decoder.config().tag_schema, "fixed");

        let bytes = ItemBuilder::new(codes::ED25519)
            .tags(vec![Tag::new("ignored", "by-fixed-decoder")])
            .build();
        let item = decoder.decode_data_item(&bytes).unwrap();
        assert_eq!(item.tags, vec![Tag::new("fixed", "tag")]);
    }

    #[test]
    fn test_default_functions() {
        let item = ItemBuilder::new(codes::ED25519).payload(b"abc").build();
        let bundle = decode_bundle(&build_bundle(&[item.clone()])).unwrap();

        assert_eq!(bundle.items, vec![decode_data_item(&item).unwrap()]);
        assert!(format!("{:?}", Decoder::default()).contains("avro"));
    }
}
