//! Payload codec
//!
//! Composes one compression strategy and one encoding strategy into a
//! single encode/decode pair, applied in a fixed order: compress then
//! encode on the way out, decode then decompress on the way back.

use std::fmt;

use crate::algorithm::{CompressionAlgorithm, EncodingAlgorithm};
use crate::error::Result;

/// Stateless codec for one `(compression, encoding)` choice
///
/// The encoding stored here is the *effective* one: constructing a codec
/// with compression enabled and no textual encoding resolves to URL-safe
/// Base64 via [`EncodingAlgorithm::effective_for`]. The codec performs no
/// attribute bookkeeping.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct PayloadCodec {
    compression: CompressionAlgorithm,
    encoding: EncodingAlgorithm,
}

impl PayloadCodec {
    /// Create a codec for the given algorithms.
    pub fn new(compression: CompressionAlgorithm, encoding: EncodingAlgorithm) -> Self {
        Self {
            compression,
            encoding: EncodingAlgorithm::effective_for(compression, encoding),
        }
    }

    /// The compression algorithm applied by this codec
    pub fn compression(&self) -> CompressionAlgorithm {
        self.compression
    }

    /// The effective encoding applied by this codec
    pub fn encoding(&self) -> EncodingAlgorithm {
        self.encoding
    }

    /// Compress and encode a payload into its transportable string form.
    pub fn encode(&self, payload: &[u8]) -> Result<String> {
        let compressed = self.compression.compressor().compress(payload)?;
        let encoded = self.encoding.encoder().encode(&compressed)?;
        Ok(encoded.into_owned())
    }

    /// Decode and decompress a transportable string back into payload bytes.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>> {
        let decoded = self.encoding.encoder().decode(encoded)?;
        let restored = self.compression.compressor().decompress(&decoded)?;
        Ok(restored.into_owned())
    }
}

impl fmt::Debug for PayloadCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadCodec")
            .field("compression", &self.compression.id())
            .field("encoding", &self.encoding.id())
            .finish()
    }
}
