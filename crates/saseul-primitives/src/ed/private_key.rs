//! Ed25519 private key (seed) for SASEUL accounts.
//!
//! Wraps an ed25519-dalek signing key built from a 32-byte seed and adds hex
//! parsing with strict length checks and detached signing.

use std::fmt;

use ed25519_dalek::{Signer, SigningKey};

use crate::ed::public_key::PublicKey;
use crate::ed::seed::{generate_seed, SEED_LEN};
use crate::ed::signature::Signature;
use crate::PrimitivesError;

/// Length of a hex-encoded private key.
const PRIVATE_KEY_HEX_LEN: usize = SEED_LEN * 2;

/// An Ed25519 private key.
///
/// The 32 bytes are used directly as the Ed25519 seed, so the public key and
/// all signatures are pure functions of them.
#[derive(Clone)]
pub struct PrivateKey {
    /// The underlying dalek signing key.
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a new private key from a fresh seed.
    ///
    /// See [`generate_seed`] for the seed layout.
    pub fn generate() -> Self {
        Self::from_seed(&generate_seed())
    }

    /// Create a private key from a raw 32-byte seed.
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        PrivateKey {
            inner: SigningKey::from_bytes(seed),
        }
    }

    /// Create a private key from a byte slice.
    ///
    /// # Returns
    /// An error if `bytes` is not exactly 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let seed: [u8; SEED_LEN] = bytes.try_into().map_err(|_| PrimitivesError::InvalidKeyLength {
            expected: SEED_LEN,
            got: bytes.len(),
        })?;
        Ok(Self::from_seed(&seed))
    }

    /// Create a private key from its hex form.
    ///
    /// # Arguments
    /// * `hex_str` - Exactly 64 hex characters.
    ///
    /// # Returns
    /// `InvalidSeedFormat` for any other length or for non-hex characters.
    /// The input is never truncated or padded.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.len() != PRIVATE_KEY_HEX_LEN {
            return Err(PrimitivesError::InvalidSeedFormat(format!(
                "expected {} hex characters, got {}",
                PRIVATE_KEY_HEX_LEN,
                hex_str.len()
            )));
        }
        let mut seed = [0u8; SEED_LEN];
        hex::decode_to_slice(hex_str, &mut seed)
            .map_err(|e| PrimitivesError::InvalidSeedFormat(e.to_string()))?;
        Ok(Self::from_seed(&seed))
    }

    /// The 32 seed bytes.
    pub fn to_bytes(&self) -> [u8; SEED_LEN] {
        self.inner.to_bytes()
    }

    /// The seed as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derive the corresponding public key.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from(self.inner.verifying_key())
    }

    /// Produce a detached Ed25519 signature over `message`.
    ///
    /// Signing is deterministic: the same key and message always yield the
    /// same signature.
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature::from(self.inner.sign(message))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.pub_key().to_hex())
            .finish_non_exhaustive()
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}
