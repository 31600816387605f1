//! SASEUL account: private key, public key, and address.
//!
//! Public key and address are pure functions of the private key, so an
//! account is either fully derived or not created at all.

use std::fmt;

use saseul_primitives::ed::{PrivateKey, PublicKey, Signature};
use tracing::debug;

use crate::address::Address;
use crate::AccountError;

/// An immutable SASEUL account.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    private_key: PrivateKey,
    public_key: PublicKey,
    address: Address,
}

impl Account {
    /// Create an account from an optional hex seed.
    ///
    /// With `None`, a fresh seed is generated. A supplied seed must be exactly
    /// 64 hex characters; otherwise the seed-format error is returned.
    pub fn create(seed: Option<&str>) -> Result<Self, AccountError> {
        match seed {
            Some(hex_seed) => Ok(Self::from_private_key(PrivateKey::from_hex(hex_seed)?)),
            None => Ok(Self::generate()),
        }
    }

    /// Create an account from a freshly generated seed.
    pub fn generate() -> Self {
        Self::from_private_key(PrivateKey::generate())
    }

    /// Derive the public key and address of an existing private key.
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = private_key.pub_key();
        let address = Address::from_public_key(&public_key);
        debug!(address = %address, "derived account");
        Account {
            private_key,
            public_key,
            address,
        }
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Detached signature over the raw bytes of `message`.
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.private_key.sign(message)
    }

    /// Check a signature made by this account's key.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.public_key.verify(message, signature)
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("public_key", &self.public_key.to_hex())
            .field("address", &self.address.address_string)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saseul_primitives::PrimitivesError;

    fn zero_seed() -> String {
        "0".repeat(64)
    }

    #[test]
    fn test_create_from_zero_seed() {
        let account = Account::create(Some(zero_seed().as_str())).unwrap();

        assert_eq!(account.private_key().to_hex(), zero_seed());
        assert_eq!(account.public_key().to_hex().len(), 64);
        assert_eq!(account.address().as_str().len(), 48);

        assert!(account.public_key().to_hex().contains("3b6a27b"));
        assert!(account.address().as_str().starts_with("0x6f3b"));
        assert!(account.address().as_str().contains("0f5b"));
    }

    #[test]
    fn test_create_is_deterministic() {
        let seed = "4f".repeat(32);
        let a = Account::create(Some(seed.as_str())).unwrap();
        let b = Account::create(Some(seed.as_str())).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.address(), b.address());
    }

    #[test]
    fn test_create_without_seed() {
        let a = Account::create(None).unwrap();
        let b = Account::create(None).unwrap();
        assert_eq!(a.private_key().to_hex().len(), 64);
        assert_ne!(a.private_key(), b.private_key());
        assert_ne!(a.address(), b.address());
        assert!(Address::from_string(a.address().as_str()).is_ok());
    }

    #[test]
    fn test_create_rejects_bad_seed() {
        let bad_seeds = vec![
            String::new(),
            "00".to_string(),
            "0".repeat(63),
            "0".repeat(65),
            "g".repeat(64),
        ];
        for seed in &bad_seeds {
            let err = Account::create(Some(seed.as_str())).unwrap_err();
            assert!(
                matches!(err, AccountError::Primitives(PrimitivesError::InvalidSeedFormat(_))),
                "seed {:?} gave {:?}",
                seed,
                err
            );
        }
    }

    #[test]
    fn test_sign_hex_text_of_zero_seed_thash() {
        // Hash of the 0.5 SendCoin sample transaction, signed as hex text.
        let account = Account::create(Some(zero_seed().as_str())).unwrap();
        let thash = "3f2cf30b277f1a9c3f4de9886592de2141a79300a297abe726f9b7b1749393be";
        let sig = account.sign(thash.as_bytes());
        assert_eq!(sig.to_hex().len(), 128);
        assert!(sig.to_hex().contains("dd30a62"));
        assert!(account.verify(thash.as_bytes(), &sig));
    }

    #[test]
    fn test_debug_hides_private_key() {
        let seed = "ab".repeat(32);
        let account = Account::create(Some(seed.as_str())).unwrap();
        let shown = format!("{:?}", account);
        assert!(!shown.contains(&seed));
        assert!(shown.contains(account.address().as_str()));
    }
}
