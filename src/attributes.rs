//! Message attribute schema and codec metadata
//!
//! The attribute schema is the wire contract: six reserved keys describing
//! the transform applied to a message body. [`CodecMetadata`] builds the
//! outbound attribute set and runs the inbound validation sequence
//! (presence, algorithm resolution, combination legality, version check).

use std::collections::HashMap;
use std::fmt;

use crate::algorithm::{
    AlgorithmKind, ChecksumAlgorithm, CompressionAlgorithm, EncodingAlgorithm,
};
use crate::codec::PayloadCodec;
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::PROTOCOL_VERSION;

/// Attribute key carrying the compression algorithm id
pub const COMPRESSION_ALG: &str = "x-codec-compression-alg";
/// Attribute key carrying the effective encoding algorithm id
pub const ENCODING_ALG: &str = "x-codec-encoding-alg";
/// Attribute key carrying the checksum algorithm id
pub const CHECKSUM_ALG: &str = "x-codec-checksum-alg";
/// Attribute key carrying the hex checksum of the raw payload bytes
pub const CHECKSUM: &str = "x-codec-checksum";
/// Attribute key carrying the protocol version
pub const VERSION: &str = "x-codec-version";
/// Attribute key carrying the raw payload byte length
pub const RAW_LENGTH: &str = "x-codec-raw-length";

/// A typed message attribute value
///
/// Mirrors the shape queue transports give attribute values: a data type
/// tag plus a string form. Numbers are carried in decimal string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// String-typed value
    String(String),
    /// Number-typed value, in decimal string form
    Number(String),
}

impl AttributeValue {
    /// Build a string-typed value.
    pub fn string(value: impl Into<String>) -> Self {
        AttributeValue::String(value.into())
    }

    /// Build a number-typed value from its decimal form.
    pub fn number(value: impl fmt::Display) -> Self {
        AttributeValue::Number(value.to_string())
    }

    /// The string form of the value, whatever its type
    pub fn value(&self) -> &str {
        match self {
            AttributeValue::String(value) | AttributeValue::Number(value) => value,
        }
    }

    /// Transport-level data type tag
    pub fn data_type(&self) -> &'static str {
        match self {
            AttributeValue::String(_) => "String",
            AttributeValue::Number(_) => "Number",
        }
    }

    /// Whether the value is empty or whitespace-only
    pub fn is_blank(&self) -> bool {
        self.value().trim().is_empty()
    }
}

/// Attribute set attached to a message
pub type AttributeMap = HashMap<String, AttributeValue>;

/// Look up an attribute's string form.
pub fn attribute_value<'a>(attributes: &'a AttributeMap, name: &str) -> Option<&'a str> {
    attributes.get(name).map(AttributeValue::value)
}

fn non_blank<'a>(attributes: &'a AttributeMap, name: &str) -> Option<&'a str> {
    attribute_value(attributes, name).filter(|value| !value.trim().is_empty())
}

/// Look up an attribute that must be present with a non-blank value.
pub fn required_attribute<'a>(
    attributes: &'a AttributeMap,
    name: &'static str,
) -> Result<&'a str> {
    non_blank(attributes, name).ok_or(CodecError::MissingAttribute { name })
}

/// Whether a message already carries codec attributes.
///
/// Used as the outbound idempotency guard: a non-blank compression or
/// encoding attribute means the body was already transformed upstream.
pub fn has_codec_attributes(attributes: &AttributeMap) -> bool {
    non_blank(attributes, COMPRESSION_ALG).is_some()
        || non_blank(attributes, ENCODING_ALG).is_some()
}

/// Machine-readable description of the transform applied to a message body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecMetadata {
    compression: CompressionAlgorithm,
    encoding: EncodingAlgorithm,
    version: u32,
}

impl CodecMetadata {
    /// Metadata for an outbound transform under the given configuration.
    ///
    /// Records the nominal compression, the **effective** encoding, and the
    /// current protocol version.
    pub fn outbound(config: &CodecConfig) -> Self {
        Self {
            compression: config.compression,
            encoding: EncodingAlgorithm::effective_for(config.compression, config.encoding),
            version: PROTOCOL_VERSION,
        }
    }

    /// Read metadata back from a received message's attributes.
    ///
    /// Returns `Ok(None)` when the message carries no codec attributes at
    /// all (never transformed by this system). Partial metadata is never
    /// treated as untransformed:
    ///
    /// # Errors
    ///
    /// - [`CodecError::MissingAttribute`] when exactly one of the
    ///   compression/encoding attributes is present and non-blank
    /// - [`CodecError::UnsupportedAlgorithm`] on an unknown id, or on a
    ///   compressed-but-unencoded combination the outbound path can never
    ///   produce
    /// - [`CodecError::UnsupportedVersion`] when a version attribute is
    ///   present but not equal to [`PROTOCOL_VERSION`]
    pub fn from_attributes(attributes: &AttributeMap) -> Result<Option<Self>> {
        let compression_value = non_blank(attributes, COMPRESSION_ALG);
        let encoding_value = non_blank(attributes, ENCODING_ALG);
        let (compression_value, encoding_value) = match (compression_value, encoding_value) {
            (None, None) => return Ok(None),
            (Some(_), None) => return Err(CodecError::MissingAttribute { name: ENCODING_ALG }),
            (None, Some(_)) => {
                return Err(CodecError::MissingAttribute {
                    name: COMPRESSION_ALG,
                })
            }
            (Some(compression), Some(encoding)) => (compression, encoding),
        };

        let compression = CompressionAlgorithm::from_id(compression_value)?;
        let encoding = EncodingAlgorithm::from_id(encoding_value)?;
        if compression != CompressionAlgorithm::None && encoding == EncodingAlgorithm::None {
            // Compressed bytes are never carried as a bare string; this
            // metadata came from a foreign producer or was corrupted.
            return Err(CodecError::UnsupportedAlgorithm {
                kind: AlgorithmKind::Encoding,
                id: encoding_value.to_string(),
            });
        }

        let version = match non_blank(attributes, VERSION) {
            // Messages from the first protocol generation carried no
            // version attribute.
            None => {
                #[cfg(feature = "logging")]
                log::trace!("version attribute absent; assuming legacy version {PROTOCOL_VERSION}");
                PROTOCOL_VERSION
            }
            Some(value) => match value.parse::<u32>() {
                Ok(version) if version == PROTOCOL_VERSION => version,
                _ => {
                    return Err(CodecError::UnsupportedVersion {
                        found: value.to_string(),
                    })
                }
            },
        };

        Ok(Some(Self {
            compression,
            encoding,
            version,
        }))
    }

    /// The compression algorithm recorded in this metadata
    pub fn compression(&self) -> CompressionAlgorithm {
        self.compression
    }

    /// The effective encoding recorded in this metadata
    pub fn encoding(&self) -> EncodingAlgorithm {
        self.encoding
    }

    /// The protocol version recorded in this metadata
    pub fn version(&self) -> u32 {
        self.version
    }

    /// The codec for this metadata's algorithm pair
    pub fn codec(&self) -> PayloadCodec {
        PayloadCodec::new(self.compression, self.encoding)
    }

    /// Write the full outbound attribute set.
    ///
    /// `raw_payload` is the body's byte form before any transform; its
    /// length and (when checksumming is enabled) its digest are recorded
    /// alongside the algorithm ids and version.
    pub fn write_to(
        &self,
        attributes: &mut AttributeMap,
        checksum: ChecksumAlgorithm,
        raw_payload: &[u8],
    ) {
        attributes.insert(
            COMPRESSION_ALG.to_string(),
            AttributeValue::string(self.compression.id()),
        );
        attributes.insert(
            ENCODING_ALG.to_string(),
            AttributeValue::string(self.encoding.id()),
        );
        if let Some(digestor) = checksum.digestor() {
            attributes.insert(
                CHECKSUM_ALG.to_string(),
                AttributeValue::string(checksum.id()),
            );
            attributes.insert(
                CHECKSUM.to_string(),
                AttributeValue::string(digestor.checksum(raw_payload)),
            );
        }
        attributes.insert(VERSION.to_string(), AttributeValue::number(self.version));
        attributes.insert(
            RAW_LENGTH.to_string(),
            AttributeValue::number(raw_payload.len()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> AttributeMap {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), AttributeValue::string(*value)))
            .collect()
    }

    #[test]
    fn outbound_metadata_records_effective_encoding() {
        let config = CodecConfig::new(
            CompressionAlgorithm::Zstd,
            EncodingAlgorithm::None,
            ChecksumAlgorithm::Md5,
        );

        let metadata = CodecMetadata::outbound(&config);
        assert_eq!(metadata.compression(), CompressionAlgorithm::Zstd);
        assert_eq!(metadata.encoding(), EncodingAlgorithm::Base64Url);
        assert_eq!(metadata.version(), PROTOCOL_VERSION);
    }

    #[test]
    fn write_to_emits_full_attribute_set() {
        let config = CodecConfig::new(
            CompressionAlgorithm::Zstd,
            EncodingAlgorithm::None,
            ChecksumAlgorithm::Md5,
        );
        let mut attributes = AttributeMap::new();

        CodecMetadata::outbound(&config).write_to(
            &mut attributes,
            config.checksum,
            b"{\"value\":42}",
        );

        assert_eq!(attributes[COMPRESSION_ALG], AttributeValue::string("zstd"));
        assert_eq!(attributes[ENCODING_ALG], AttributeValue::string("base64"));
        assert_eq!(attributes[CHECKSUM_ALG], AttributeValue::string("md5"));
        assert!(!attributes[CHECKSUM].is_blank());
        assert_eq!(attributes[VERSION], AttributeValue::number(1));
        assert_eq!(attributes[VERSION].data_type(), "Number");
        assert_eq!(attributes[RAW_LENGTH], AttributeValue::number(12));
    }

    #[test]
    fn write_to_omits_checksum_attributes_when_disabled() {
        let mut attributes = AttributeMap::new();

        CodecMetadata::outbound(&CodecConfig::new(
            CompressionAlgorithm::Gzip,
            EncodingAlgorithm::Base64Std,
            ChecksumAlgorithm::None,
        ))
        .write_to(&mut attributes, ChecksumAlgorithm::None, b"payload-42");

        assert!(!attributes.contains_key(CHECKSUM_ALG));
        assert!(!attributes.contains_key(CHECKSUM));
        assert_eq!(
            attributes[ENCODING_ALG],
            AttributeValue::string("base64-std")
        );
    }

    #[test]
    fn absent_attributes_mean_untransformed() {
        assert_eq!(CodecMetadata::from_attributes(&map(&[])).unwrap(), None);
        assert!(!has_codec_attributes(&map(&[])));
    }

    #[test]
    fn blank_attributes_mean_untransformed() {
        let attributes = map(&[(COMPRESSION_ALG, ""), (ENCODING_ALG, "  ")]);
        assert_eq!(CodecMetadata::from_attributes(&attributes).unwrap(), None);
        assert!(!has_codec_attributes(&attributes));
    }

    #[test]
    fn partial_metadata_is_rejected() {
        let error = CodecMetadata::from_attributes(&map(&[(COMPRESSION_ALG, "zstd")]))
            .unwrap_err();
        assert!(matches!(
            error,
            CodecError::MissingAttribute { name } if name == ENCODING_ALG
        ));

        let error = CodecMetadata::from_attributes(&map(&[(ENCODING_ALG, "base64")]))
            .unwrap_err();
        assert!(matches!(
            error,
            CodecError::MissingAttribute { name } if name == COMPRESSION_ALG
        ));
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let attributes = map(&[(COMPRESSION_ALG, "lzma"), (ENCODING_ALG, "base64")]);
        let error = CodecMetadata::from_attributes(&attributes).unwrap_err();
        assert_eq!(error.to_string(), "Unsupported compression algorithm: lzma");
    }

    #[test]
    fn compressed_but_unencoded_combination_is_rejected() {
        let attributes = map(&[(COMPRESSION_ALG, "zstd"), (ENCODING_ALG, "none")]);
        let error = CodecMetadata::from_attributes(&attributes).unwrap_err();
        assert_eq!(error.to_string(), "Unsupported encoding algorithm: none");
    }

    #[test]
    fn uncompressed_plaintext_metadata_is_accepted() {
        let attributes = map(&[(COMPRESSION_ALG, "none"), (ENCODING_ALG, "none")]);
        let metadata = CodecMetadata::from_attributes(&attributes).unwrap().unwrap();
        assert_eq!(metadata.compression(), CompressionAlgorithm::None);
        assert_eq!(metadata.encoding(), EncodingAlgorithm::None);
    }

    #[test]
    fn absent_version_defaults_to_legacy() {
        let attributes = map(&[(COMPRESSION_ALG, "gzip"), (ENCODING_ALG, "base64")]);
        let metadata = CodecMetadata::from_attributes(&attributes).unwrap().unwrap();
        assert_eq!(metadata.version(), PROTOCOL_VERSION);
    }

    #[test]
    fn version_mismatch_is_rejected() {
        for bad in ["2", "0", "1.0.0", "v1"] {
            let attributes = map(&[
                (COMPRESSION_ALG, "gzip"),
                (ENCODING_ALG, "base64"),
                (VERSION, bad),
            ]);
            let error = CodecMetadata::from_attributes(&attributes).unwrap_err();
            assert_eq!(
                error.to_string(),
                format!("Unsupported codec version: {bad}")
            );
        }
    }

    #[test]
    fn exact_version_is_accepted() {
        let attributes = map(&[
            (COMPRESSION_ALG, "gzip"),
            (ENCODING_ALG, "base64"),
            (VERSION, "1"),
        ]);
        let metadata = CodecMetadata::from_attributes(&attributes).unwrap().unwrap();
        assert_eq!(metadata.version(), 1);
    }

    #[test]
    fn required_attribute_rejects_blank() {
        let attributes = map(&[(CHECKSUM, "  ")]);
        let error = required_attribute(&attributes, CHECKSUM).unwrap_err();
        assert!(matches!(
            error,
            CodecError::MissingAttribute { name } if name == CHECKSUM
        ));
    }

    #[test]
    fn metadata_codec_round_trips() {
        let attributes = map(&[(COMPRESSION_ALG, "zstd"), (ENCODING_ALG, "base64")]);
        let metadata = CodecMetadata::from_attributes(&attributes).unwrap().unwrap();

        let codec = metadata.codec();
        let encoded = codec.encode(b"payload-42").unwrap();
        assert_eq!(codec.decode(&encoded).unwrap(), b"payload-42");
    }
}
