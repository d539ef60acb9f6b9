//! Algorithm identifiers and wire-id resolution
//!
//! Each algorithm family is a closed enum whose variants own a stateless
//! `&'static` strategy singleton. Wire identifiers are stable lowercase
//! strings; resolution from a string only happens at the system boundary,
//! when message attributes are read back.

use std::fmt;

use crate::checksum::{Digestor, Md5Digestor, Sha256Digestor};
use crate::compression::{
    Compressor, GzipCompressor, SnappyCompressor, UncompressedCompressor, ZstdCompressor,
};
use crate::encoding::{Base64StdEncoder, Base64UrlEncoder, Encoder, PlainTextEncoder};
use crate::error::{CodecError, Result};

/// The algorithm family an identifier belongs to, used in error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    /// Compression algorithms
    Compression,
    /// Transport encodings
    Encoding,
    /// Checksum algorithms
    Checksum,
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::Compression => write!(f, "compression"),
            AlgorithmKind::Encoding => write!(f, "encoding"),
            AlgorithmKind::Checksum => write!(f, "checksum"),
        }
    }
}

/// Supported compression algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompressionAlgorithm {
    /// Zstandard, high ratio with good performance
    Zstd,
    /// Gzip, for interoperability with common tooling
    Gzip,
    /// Snappy, for low-latency payloads
    Snappy,
    /// No compression; payload bytes are left as-is
    #[default]
    None,
}

impl CompressionAlgorithm {
    /// All members, in wire-id resolution order
    pub const ALL: [CompressionAlgorithm; 4] = [
        CompressionAlgorithm::Zstd,
        CompressionAlgorithm::Gzip,
        CompressionAlgorithm::Snappy,
        CompressionAlgorithm::None,
    ];

    /// Stable wire identifier carried in message attributes
    pub fn id(&self) -> &'static str {
        match self {
            CompressionAlgorithm::Zstd => "zstd",
            CompressionAlgorithm::Gzip => "gzip",
            CompressionAlgorithm::Snappy => "snappy",
            CompressionAlgorithm::None => "none",
        }
    }

    /// Resolve a wire identifier, case-insensitively.
    ///
    /// Blank or unknown input is an error; blankness never implies a default.
    pub fn from_id(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.id().eq_ignore_ascii_case(value))
            .ok_or_else(|| CodecError::UnsupportedAlgorithm {
                kind: AlgorithmKind::Compression,
                id: value.to_string(),
            })
    }

    /// The strategy implementing this algorithm
    pub fn compressor(&self) -> &'static dyn Compressor {
        match self {
            CompressionAlgorithm::Zstd => &ZstdCompressor,
            CompressionAlgorithm::Gzip => &GzipCompressor,
            CompressionAlgorithm::Snappy => &SnappyCompressor,
            CompressionAlgorithm::None => &UncompressedCompressor,
        }
    }
}

impl fmt::Display for CompressionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Supported transport encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncodingAlgorithm {
    /// URL-safe Base64 with padding
    Base64Url,
    /// Standard Base64 ("+", "/") with padding
    Base64Std,
    /// No encoding; payload bytes are treated as UTF-8 text
    #[default]
    None,
}

impl EncodingAlgorithm {
    /// All members, in wire-id resolution order
    pub const ALL: [EncodingAlgorithm; 3] = [
        EncodingAlgorithm::Base64Url,
        EncodingAlgorithm::Base64Std,
        EncodingAlgorithm::None,
    ];

    /// Stable wire identifier carried in message attributes
    pub fn id(&self) -> &'static str {
        match self {
            EncodingAlgorithm::Base64Url => "base64",
            EncodingAlgorithm::Base64Std => "base64-std",
            EncodingAlgorithm::None => "none",
        }
    }

    /// Resolve a wire identifier, case-insensitively.
    pub fn from_id(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.id().eq_ignore_ascii_case(value))
            .ok_or_else(|| CodecError::UnsupportedAlgorithm {
                kind: AlgorithmKind::Encoding,
                id: value.to_string(),
            })
    }

    /// The encoding actually applied for a `(compression, encoding)` choice.
    ///
    /// A compressed byte stream is not valid UTF-8 in general, so it can
    /// never travel as a bare string: when compression is on and no textual
    /// encoding was chosen, URL-safe Base64 is used. Every other combination
    /// respects the caller's choice. Both the attribute-writing path and
    /// codec construction go through this one function.
    pub fn effective_for(
        compression: CompressionAlgorithm,
        encoding: EncodingAlgorithm,
    ) -> EncodingAlgorithm {
        if encoding == EncodingAlgorithm::None && compression != CompressionAlgorithm::None {
            return EncodingAlgorithm::Base64Url;
        }
        encoding
    }

    /// The strategy implementing this encoding
    pub fn encoder(&self) -> &'static dyn Encoder {
        match self {
            EncodingAlgorithm::Base64Url => &Base64UrlEncoder,
            EncodingAlgorithm::Base64Std => &Base64StdEncoder,
            EncodingAlgorithm::None => &PlainTextEncoder,
        }
    }
}

impl fmt::Display for EncodingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Supported checksum algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChecksumAlgorithm {
    /// MD5, lightweight integrity check
    Md5,
    /// SHA-256, stronger integrity guarantee
    Sha256,
    /// No checksum; integrity attributes are omitted
    #[default]
    None,
}

impl ChecksumAlgorithm {
    /// All members, in wire-id resolution order
    pub const ALL: [ChecksumAlgorithm; 3] = [
        ChecksumAlgorithm::Md5,
        ChecksumAlgorithm::Sha256,
        ChecksumAlgorithm::None,
    ];

    /// Stable wire identifier carried in message attributes
    pub fn id(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::Md5 => "md5",
            ChecksumAlgorithm::Sha256 => "sha256",
            ChecksumAlgorithm::None => "none",
        }
    }

    /// Resolve a wire identifier, case-insensitively.
    pub fn from_id(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.id().eq_ignore_ascii_case(value))
            .ok_or_else(|| CodecError::UnsupportedAlgorithm {
                kind: AlgorithmKind::Checksum,
                id: value.to_string(),
            })
    }

    /// The strategy implementing this algorithm, or `None` when checksumming
    /// is disabled.
    ///
    /// Callers must check for a digestor rather than ask the disabled
    /// variant for a digest, so an accidental "checksum of nothing" cannot
    /// be produced.
    pub fn digestor(&self) -> Option<&'static dyn Digestor> {
        match self {
            ChecksumAlgorithm::Md5 => Some(&Md5Digestor),
            ChecksumAlgorithm::Sha256 => Some(&Sha256Digestor),
            ChecksumAlgorithm::None => None,
        }
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
