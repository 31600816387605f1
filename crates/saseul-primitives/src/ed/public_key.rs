//! Ed25519 public key.
//!
//! Supports raw and hex serialization and detached signature verification.

use std::fmt;

use ed25519_dalek::{Verifier, VerifyingKey};

use crate::ed::signature::Signature;
use crate::PrimitivesError;

/// Length of an Ed25519 public key in bytes.
const PUBLIC_KEY_LEN: usize = 32;

/// An Ed25519 public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey {
    /// The underlying dalek verifying key.
    inner: VerifyingKey,
}

impl PublicKey {
    /// Create a public key from its 32-byte encoding.
    ///
    /// # Returns
    /// An error if the length is wrong or the bytes are not a valid point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let raw: [u8; PUBLIC_KEY_LEN] =
            bytes.try_into().map_err(|_| PrimitivesError::InvalidKeyLength {
                expected: PUBLIC_KEY_LEN,
                got: bytes.len(),
            })?;
        let inner = VerifyingKey::from_bytes(&raw)
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        Ok(PublicKey { inner })
    }

    /// Create a public key from 64 hex characters.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// The 32-byte encoding.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.inner.to_bytes()
    }

    /// The encoding as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Verify a detached signature over `message`.
    ///
    /// # Returns
    /// `true` if the signature is valid for this key and exactly these bytes.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.inner.verify(message, signature.inner()).is_ok()
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(inner: VerifyingKey) -> Self {
        PublicKey { inner }
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ed::PrivateKey;

    #[test]
    fn test_hex_roundtrip() {
        let pub_key = PrivateKey::generate().pub_key();
        let parsed = PublicKey::from_hex(&pub_key.to_hex()).unwrap();
        assert_eq!(pub_key, parsed);
        assert_eq!(format!("{}", parsed), pub_key.to_hex());
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(PublicKey::from_hex("not hex").is_err());
        assert!(matches!(
            PublicKey::from_hex("abcd"),
            Err(PrimitivesError::InvalidKeyLength { expected: 32, got: 2 })
        ));
    }

    #[test]
    fn test_verify_roundtrip() {
        let key = PrivateKey::generate();
        let sig = key.sign(b"payload");
        assert!(key.pub_key().verify(b"payload", &sig));
    }

    #[test]
    fn test_verify_wrong_message_fails() {
        let key = PrivateKey::generate();
        let sig = key.sign(b"payload");
        assert!(!key.pub_key().verify(b"Payload", &sig));
    }

    #[test]
    fn test_verify_wrong_key_fails() {
        let key = PrivateKey::generate();
        let other = PrivateKey::generate();
        let sig = key.sign(b"payload");
        assert!(!other.pub_key().verify(b"payload", &sig));
    }
}
