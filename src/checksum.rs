//! Checksum strategies
//!
//! Digests are always computed over the raw payload bytes, before any
//! compression or encoding, and rendered as lowercase hex.

use md5::{Digest, Md5};
use sha2::Sha256;

/// Strategy interface for computing payload checksums
pub trait Digestor: Send + Sync {
    /// Hex digest of the payload bytes. Pure and stable for a given input.
    fn checksum(&self, payload: &[u8]) -> String;
}

/// MD5 digests
pub struct Md5Digestor;

impl Digestor for Md5Digestor {
    fn checksum(&self, payload: &[u8]) -> String {
        hex::encode(Md5::digest(payload))
    }
}

/// SHA-256 digests
pub struct Sha256Digestor;

impl Digestor for Sha256Digestor {
    fn checksum(&self, payload: &[u8]) -> String {
        hex::encode(Sha256::digest(payload))
    }
}
