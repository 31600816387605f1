//! Detached Ed25519 signature.

use std::fmt;

use crate::PrimitivesError;

/// Length of an Ed25519 signature in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// A 64-byte detached Ed25519 signature.
///
/// The signed message is not embedded; verification needs the original bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    inner: ed25519_dalek::Signature,
}

impl Signature {
    /// Create a signature from its 64-byte encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let raw: [u8; SIGNATURE_LEN] = bytes.try_into().map_err(|_| {
            PrimitivesError::InvalidSignature(format!(
                "expected {} bytes, got {}",
                SIGNATURE_LEN,
                bytes.len()
            ))
        })?;
        Ok(Signature {
            inner: ed25519_dalek::Signature::from_bytes(&raw),
        })
    }

    /// Create a signature from 128 hex characters.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// The 64-byte encoding.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        self.inner.to_bytes()
    }

    /// The encoding as 128 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub(crate) fn inner(&self) -> &ed25519_dalek::Signature {
        &self.inner
    }
}

impl From<ed25519_dalek::Signature> for Signature {
    fn from(inner: ed25519_dalek::Signature) -> Self {
        Signature { inner }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ed::PrivateKey;

    #[test]
    fn test_hex_is_128_chars() {
        let sig = PrivateKey::generate().sign(b"abc");
        assert_eq!(sig.to_hex().len(), 128);
    }

    #[test]
    fn test_hex_roundtrip() {
        let sig = PrivateKey::generate().sign(b"abc");
        assert_eq!(Signature::from_hex(&sig.to_hex()).unwrap(), sig);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = Signature::from_bytes(&[0u8; 63]).unwrap_err();
        assert!(matches!(err, PrimitivesError::InvalidSignature(_)));
        assert!(Signature::from_hex("zz").is_err());
    }

    /// RFC 8032 test 1: empty message under the all-0x9d seed.
    #[test]
    fn test_rfc8032_vector_1() {
        let key = PrivateKey::from_hex(
            "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
        )
        .unwrap();
        assert_eq!(
            key.pub_key().to_hex(),
            "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"
        );
        assert_eq!(
            key.sign(b"").to_hex(),
            "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155\
             5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b"
        );
    }
}
