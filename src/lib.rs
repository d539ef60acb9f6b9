//! # Paco - Payload codec for message queues
//!
//! A transformation and integrity layer for queue message bodies: compress,
//! encode and checksum payloads on the way out, and reverse the transform on
//! the way back in while validating integrity and protocol version.
//!
//! ## Key Features
//!
//! - **Strategy-based pipeline**: swappable compression (zstd, gzip,
//!   snappy), transport encoding (base64 variants, plaintext) and checksum
//!   (MD5, SHA-256) families, each with an identity member
//! - **Effective-encoding rule**: compressed bytes never travel as a bare
//!   string — base64 is applied automatically when needed
//! - **Metadata protocol**: a small attribute schema carries the applied
//!   algorithms, checksum, version and raw length alongside the payload
//! - **Strict validation**: corruption, partial metadata, unknown
//!   algorithms and version mismatches fail loudly and specifically
//!
//! ## Quick Start
//!
//! ```rust
//! use paco::{CompressionAlgorithm, EncodingAlgorithm, PayloadCodec};
//!
//! // Compression with no textual encoding resolves to URL-safe base64.
//! let codec = PayloadCodec::new(CompressionAlgorithm::Zstd, EncodingAlgorithm::None);
//! assert_eq!(codec.encoding(), EncodingAlgorithm::Base64Url);
//!
//! let encoded = codec.encode(b"{\"value\":42}").unwrap();
//! let decoded = codec.decode(&encoded).unwrap();
//! assert_eq!(decoded, b"{\"value\":42}");
//! ```
//!
//! ## Modules
//!
//! - [`algorithm`]: Algorithm identifiers and wire-id resolution
//! - [`compression`]: Compression strategies
//! - [`encoding`]: Transport encoding strategies
//! - [`checksum`]: Checksum strategies
//! - [`codec`]: The compression+encoding payload codec
//! - [`attributes`]: Attribute schema and codec metadata
//! - [`config`]: Immutable codec configuration
//! - [`error`]: Error types

// Modules
pub mod algorithm;
pub mod attributes;
pub mod checksum;
pub mod codec;
pub mod compression;
pub mod config;
pub mod encoding;
pub mod error;

// Re-exports for convenient access
pub use algorithm::{AlgorithmKind, ChecksumAlgorithm, CompressionAlgorithm, EncodingAlgorithm};
pub use attributes::{AttributeMap, AttributeValue, CodecMetadata};
pub use checksum::Digestor;
pub use codec::PayloadCodec;
pub use compression::Compressor;
pub use config::CodecConfig;
pub use encoding::Encoder;
pub use error::{CodecError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Protocol version written to, and expected back from, the version
/// attribute. Decode requires an exact match; a missing attribute is
/// accepted as this first generation.
pub const PROTOCOL_VERSION: u32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_basic_roundtrip() {
        let codec = PayloadCodec::new(CompressionAlgorithm::Gzip, EncodingAlgorithm::Base64Std);
        let payload = b"{\"value\":42}";

        let encoded = codec.encode(payload).unwrap();
        let decoded = codec.decode(&encoded).unwrap();

        assert_eq!(decoded, payload);
    }
}
