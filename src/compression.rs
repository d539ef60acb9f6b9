//! Compression strategies
//!
//! Strategies operate on whole in-memory payloads and are stateless unit
//! structs, shared as `&'static` singletons across any number of concurrent
//! callers. A `Cow::Borrowed` return means the input was passed through
//! without copying.

use std::borrow::Cow;
use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{CodecError, Result};

/// Strategy interface for compressing and decompressing payload bytes
pub trait Compressor: Send + Sync {
    /// Compress a payload.
    fn compress<'a>(&self, payload: &'a [u8]) -> Result<Cow<'a, [u8]>>;

    /// Decompress a payload.
    ///
    /// Fails with [`CodecError::CorruptPayload`] when the input is not a
    /// valid stream for this algorithm; never returns partial data.
    fn decompress<'a>(&self, payload: &'a [u8]) -> Result<Cow<'a, [u8]>>;
}

/// Zstandard compression
pub struct ZstdCompressor;

impl Compressor for ZstdCompressor {
    fn compress<'a>(&self, payload: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        let compressed = zstd::stream::encode_all(payload, zstd::DEFAULT_COMPRESSION_LEVEL)
            .map_err(|e| CodecError::corrupt("Zstd compression failed", e))?;
        Ok(Cow::Owned(compressed))
    }

    fn decompress<'a>(&self, payload: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        let restored = zstd::stream::decode_all(payload)
            .map_err(|e| CodecError::corrupt("Invalid zstd payload", e))?;
        Ok(Cow::Owned(restored))
    }
}

/// Gzip compression
pub struct GzipCompressor;

impl Compressor for GzipCompressor {
    fn compress<'a>(&self, payload: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(payload)
            .and_then(|_| encoder.finish())
            .map(Cow::Owned)
            .map_err(|e| CodecError::corrupt("Gzip compression failed", e))
    }

    fn decompress<'a>(&self, payload: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        let mut decoder = GzDecoder::new(payload);
        let mut restored = Vec::new();
        decoder
            .read_to_end(&mut restored)
            .map_err(|e| CodecError::corrupt("Invalid gzip payload", e))?;
        Ok(Cow::Owned(restored))
    }
}

/// Snappy compression
pub struct SnappyCompressor;

impl Compressor for SnappyCompressor {
    fn compress<'a>(&self, payload: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        let compressed = snap::raw::Encoder::new()
            .compress_vec(payload)
            .map_err(|e| CodecError::corrupt("Snappy compression failed", e))?;
        Ok(Cow::Owned(compressed))
    }

    fn decompress<'a>(&self, payload: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        let restored = snap::raw::Decoder::new()
            .decompress_vec(payload)
            .map_err(|e| CodecError::corrupt("Invalid snappy payload", e))?;
        Ok(Cow::Owned(restored))
    }
}

/// Identity strategy; both directions return the input borrowed
pub struct UncompressedCompressor;

impl Compressor for UncompressedCompressor {
    fn compress<'a>(&self, payload: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        Ok(Cow::Borrowed(payload))
    }

    fn decompress<'a>(&self, payload: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        Ok(Cow::Borrowed(payload))
    }
}
