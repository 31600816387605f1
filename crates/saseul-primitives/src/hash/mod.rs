//! Hash function primitives for the SASEUL SDK.
//!
//! Provides SHA-256 and RIPEMD-160 as raw digests and as lowercase hex text.
//! The SASEUL protocol chains hashes over the *hex text* of earlier digests
//! (addresses, transaction hashes), so the `_hex` variants are the ones the
//! rest of the SDK builds on.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute RIPEMD-160 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 20-byte RIPEMD-160 digest.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256 of `data` as 64 lowercase hex characters.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// RIPEMD-160 of `data` as 40 lowercase hex characters.
pub fn ripemd160_hex(data: &[u8]) -> String {
    hex::encode(ripemd160(data))
}
