//! Error types for the payload codec
//!
//! Every failure mode is caller-visible and non-retryable: a message is
//! either fully transformed/restored or rejected outright.

use thiserror::Error;

use crate::algorithm::AlgorithmKind;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Main error type for codec operations
#[derive(Error, Debug)]
pub enum CodecError {
    /// Unknown or disallowed wire identifier, or an illegal
    /// compression/encoding combination on decode
    #[error("Unsupported {kind} algorithm: {id}")]
    UnsupportedAlgorithm {
        /// Which algorithm family the identifier belongs to
        kind: AlgorithmKind,
        /// The offending wire identifier
        id: String,
    },

    /// A required message attribute was absent or blank
    #[error("Missing required message attribute: {name}")]
    MissingAttribute {
        /// The reserved attribute key that was missing
        name: &'static str,
    },

    /// Version attribute present but not equal to [`crate::PROTOCOL_VERSION`]
    #[error("Unsupported codec version: {found}")]
    UnsupportedVersion {
        /// The version value carried by the message
        found: String,
    },

    /// Payload bytes could not be decoded or decompressed
    #[error("{message}")]
    CorruptPayload {
        /// Stable, format-specific description
        message: &'static str,
        /// The underlying decode error, kept for diagnostics
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Recomputed digest does not equal the stored digest
    #[error("Payload checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch {
        /// Digest carried by the message attributes
        expected: String,
        /// Digest recomputed over the restored bytes
        actual: String,
    },
}

impl CodecError {
    /// Build a [`CodecError::CorruptPayload`] wrapping an underlying error.
    pub fn corrupt(
        message: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        CodecError::CorruptPayload {
            message,
            source: Box::new(source),
        }
    }
}
