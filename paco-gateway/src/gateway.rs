// Paco Gateway - Queue message transform gateway
// Copyright (c) 2026 Rui Calado
//
// Licensed under the MIT License.
// See LICENSE file for details.

//! Transform gateway
//!
//! The [`TransformGateway`] sits at the hook point between a queue client
//! and the wire: it applies the configured transform to each outbound
//! message and reverses it on each inbound message, validating metadata and
//! integrity on the way back. All methods take `&self`; a gateway can be
//! shared across any number of concurrent callers.

use paco::attributes::{self, CodecMetadata};
use paco::{AlgorithmKind, ChecksumAlgorithm, CodecConfig, CodecError, Result};

use crate::message::QueueMessage;

/// Applies and reverses the configured payload transform
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformGateway {
    config: CodecConfig,
}

impl TransformGateway {
    /// Create a gateway for the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The configuration this gateway applies
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Transform one outbound message.
    ///
    /// A message already carrying codec attributes is returned unmodified —
    /// it was processed upstream and must not be transformed twice.
    /// Otherwise the raw body length is captured, the checksum (when
    /// enabled) is computed over the raw bytes before compression, the
    /// metadata attributes are attached, and the body is replaced by its
    /// compressed and encoded form.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::CorruptPayload`] if the codec cannot produce
    /// the transportable form.
    pub fn transform_outbound(&self, message: QueueMessage) -> Result<QueueMessage> {
        if attributes::has_codec_attributes(&message.attributes) {
            #[cfg(feature = "logging")]
            log::debug!("codec attributes already present; skipping transform");
            return Ok(message);
        }

        let mut message = message;
        let raw = std::mem::take(&mut message.body).into_bytes();
        let metadata = CodecMetadata::outbound(&self.config);
        metadata.write_to(&mut message.attributes, self.config.checksum, &raw);
        message.body = metadata.codec().encode(&raw)?;
        Ok(message)
    }

    /// Transform a batch of outbound messages.
    ///
    /// Entries are processed independently; an entry already carrying codec
    /// attributes is skipped without blocking the others.
    ///
    /// # Errors
    ///
    /// Fails on the first entry whose transform fails.
    pub fn transform_batch(&self, messages: Vec<QueueMessage>) -> Result<Vec<QueueMessage>> {
        messages
            .into_iter()
            .map(|message| self.transform_outbound(message))
            .collect()
    }

    /// Restore one inbound message.
    ///
    /// A message with no codec attributes passes through unchanged. For a
    /// transformed message the metadata is validated, the body is decoded
    /// and decompressed, and — when this gateway's checksum is enabled —
    /// the stored digest is verified against the restored bytes. Codec
    /// attributes remain attached to the restored message.
    ///
    /// # Errors
    ///
    /// - [`CodecError::MissingAttribute`] on partial metadata, or on absent
    ///   checksum attributes when checksum verification is enabled
    /// - [`CodecError::UnsupportedAlgorithm`] on unknown ids, an illegal
    ///   compression/encoding combination, or a checksum algorithm other
    ///   than the configured one
    /// - [`CodecError::UnsupportedVersion`] on a version mismatch
    /// - [`CodecError::CorruptPayload`] when the body cannot be decoded,
    ///   decompressed, or read back as UTF-8
    /// - [`CodecError::ChecksumMismatch`] when the recomputed digest
    ///   differs from the stored one
    pub fn restore_inbound(&self, message: QueueMessage) -> Result<QueueMessage> {
        let Some(metadata) = CodecMetadata::from_attributes(&message.attributes)? else {
            #[cfg(feature = "logging")]
            log::debug!("no codec attributes; passing message through");
            return Ok(message);
        };

        let mut message = message;
        let raw = metadata.codec().decode(&message.body)?;

        if let Some(digestor) = self.config.checksum.digestor() {
            let algorithm_value =
                attributes::required_attribute(&message.attributes, attributes::CHECKSUM_ALG)?;
            let expected =
                attributes::required_attribute(&message.attributes, attributes::CHECKSUM)?;
            let algorithm = ChecksumAlgorithm::from_id(algorithm_value)?;
            if algorithm != self.config.checksum {
                // A digest computed with an algorithm the receiver did not
                // request is never silently accepted.
                return Err(CodecError::UnsupportedAlgorithm {
                    kind: AlgorithmKind::Checksum,
                    id: algorithm_value.to_string(),
                });
            }
            let actual = digestor.checksum(&raw);
            if actual != expected {
                return Err(CodecError::ChecksumMismatch {
                    expected: expected.to_string(),
                    actual,
                });
            }
        }

        message.body = String::from_utf8(raw)
            .map_err(|e| CodecError::corrupt("Invalid UTF-8 payload", e))?;
        Ok(message)
    }

    /// Restore a batch of inbound messages.
    ///
    /// Each message is restored independently, untransformed messages
    /// passing through unchanged.
    ///
    /// # Errors
    ///
    /// Fails on the first message whose restore fails.
    pub fn restore_batch(&self, messages: Vec<QueueMessage>) -> Result<Vec<QueueMessage>> {
        messages
            .into_iter()
            .map(|message| self.restore_inbound(message))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paco::{CompressionAlgorithm, EncodingAlgorithm};

    fn gateway() -> TransformGateway {
        TransformGateway::new(CodecConfig::new(
            CompressionAlgorithm::Zstd,
            EncodingAlgorithm::None,
            ChecksumAlgorithm::Md5,
        ))
    }

    #[test]
    fn outbound_then_inbound_restores_body() {
        let gateway = gateway();
        let message = QueueMessage::new("{\"value\":42}");

        let transformed = gateway.transform_outbound(message).unwrap();
        assert_ne!(transformed.body, "{\"value\":42}");

        let restored = gateway.restore_inbound(transformed).unwrap();
        assert_eq!(restored.body, "{\"value\":42}");
    }

    #[test]
    fn outbound_transform_is_idempotent() {
        let gateway = gateway();

        let once = gateway
            .transform_outbound(QueueMessage::new("payload-42"))
            .unwrap();
        let twice = gateway.transform_outbound(once.clone()).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn untransformed_message_passes_through() {
        let gateway = gateway();
        let message = QueueMessage::new("plain text body");

        let restored = gateway.restore_inbound(message.clone()).unwrap();
        assert_eq!(restored, message);
    }
}
