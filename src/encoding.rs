//! Transport encoding strategies
//!
//! Encodings sit on the boundary between payload bytes and the
//! transportable string form of a message body. Base64 variants use the
//! standard alphabets with padding; the plaintext strategy carries the
//! bytes as UTF-8 text directly.

use std::borrow::Cow;
use std::str;

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine as _;

use crate::error::{CodecError, Result};

/// Strategy interface mapping payload bytes to a transportable string
pub trait Encoder: Send + Sync {
    /// Encode payload bytes into a transportable string.
    fn encode<'a>(&self, payload: &'a [u8]) -> Result<Cow<'a, str>>;

    /// Decode a transportable string back into payload bytes.
    ///
    /// Fails with [`CodecError::CorruptPayload`] on malformed input
    /// (invalid alphabet characters, malformed padding).
    fn decode<'a>(&self, encoded: &'a str) -> Result<Cow<'a, [u8]>>;
}

/// URL-safe Base64 with padding
pub struct Base64UrlEncoder;

impl Encoder for Base64UrlEncoder {
    fn encode<'a>(&self, payload: &'a [u8]) -> Result<Cow<'a, str>> {
        Ok(Cow::Owned(URL_SAFE.encode(payload)))
    }

    fn decode<'a>(&self, encoded: &'a str) -> Result<Cow<'a, [u8]>> {
        let decoded = URL_SAFE
            .decode(encoded)
            .map_err(|e| CodecError::corrupt("Invalid base64 payload", e))?;
        Ok(Cow::Owned(decoded))
    }
}

/// Standard Base64 with padding
pub struct Base64StdEncoder;

impl Encoder for Base64StdEncoder {
    fn encode<'a>(&self, payload: &'a [u8]) -> Result<Cow<'a, str>> {
        Ok(Cow::Owned(STANDARD.encode(payload)))
    }

    fn decode<'a>(&self, encoded: &'a str) -> Result<Cow<'a, [u8]>> {
        let decoded = STANDARD
            .decode(encoded)
            .map_err(|e| CodecError::corrupt("Invalid base64 payload", e))?;
        Ok(Cow::Owned(decoded))
    }
}

/// Plaintext passthrough; payload bytes must be valid UTF-8
pub struct PlainTextEncoder;

impl Encoder for PlainTextEncoder {
    fn encode<'a>(&self, payload: &'a [u8]) -> Result<Cow<'a, str>> {
        let text = str::from_utf8(payload)
            .map_err(|e| CodecError::corrupt("Invalid UTF-8 payload", e))?;
        Ok(Cow::Borrowed(text))
    }

    fn decode<'a>(&self, encoded: &'a str) -> Result<Cow<'a, [u8]>> {
        Ok(Cow::Borrowed(encoded.as_bytes()))
    }
}
