//! Codec configuration
//!
//! One immutable configuration per client or interceptor instance, chosen
//! before any transform and shared read-only across concurrent callers.

use crate::algorithm::{ChecksumAlgorithm, CompressionAlgorithm, EncodingAlgorithm};

/// The `(compression, encoding, checksum)` triple for a client
///
/// The configuration holds the caller's *nominal* encoding choice; the
/// effective encoding is derived on demand via
/// [`EncodingAlgorithm::effective_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Compression applied to outbound payloads
    pub compression: CompressionAlgorithm,
    /// Nominal transport encoding
    pub encoding: EncodingAlgorithm,
    /// Integrity checksum; `None` disables the integrity attributes
    pub checksum: ChecksumAlgorithm,
}

impl CodecConfig {
    /// Create a configuration from explicit algorithm choices.
    pub fn new(
        compression: CompressionAlgorithm,
        encoding: EncodingAlgorithm,
        checksum: ChecksumAlgorithm,
    ) -> Self {
        Self {
            compression,
            encoding,
            checksum,
        }
    }
}

impl Default for CodecConfig {
    /// Plaintext passthrough with MD5 integrity checking.
    fn default() -> Self {
        Self {
            compression: CompressionAlgorithm::None,
            encoding: EncodingAlgorithm::None,
            checksum: ChecksumAlgorithm::Md5,
        }
    }
}
