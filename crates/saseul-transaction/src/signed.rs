//! Signed transaction and request envelopes.
//!
//! Signing is always: canonicalize the payload, take the SHA-256 hex of that
//! text, then sign the UTF-8 bytes of the *hex digest* with the account's
//! Ed25519 key. The envelope carries the canonical text verbatim so the node
//! hashes exactly what was signed.

use saseul_account::Account;
use saseul_primitives::ed::{PublicKey, Signature};
use saseul_primitives::hash::sha256_hex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canonical::CanonicalJson;
use crate::TransactionError;

/// Result of signing an arbitrary payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedPayload {
    /// SHA-256 hex of `serialized`.
    pub hash: String,
    /// The canonical payload text that was hashed.
    pub serialized: String,
    /// Hex public key of the signer.
    pub public_key: String,
    /// Hex detached signature over the UTF-8 bytes of `hash`.
    pub signature: String,
}

/// Canonicalize, hash, and sign `payload` with `account`.
pub fn sign_payload<T: Serialize + ?Sized>(
    payload: &T,
    account: &Account,
) -> Result<SignedPayload, TransactionError> {
    let canonical = CanonicalJson::new(payload)?;
    let hash = canonical.digest();
    let signature = account.sign(hash.as_bytes());
    debug!(hash = %hash, address = %account.address(), "signed payload");

    Ok(SignedPayload {
        hash,
        serialized: canonical.into_string(),
        public_key: account.public_key().to_hex(),
        signature: signature.to_hex(),
    })
}

impl SignedPayload {
    /// Recompute the hash of `serialized` and check it and the signature.
    ///
    /// # Returns
    /// `Ok(false)` if the hash or signature does not match; an error if the
    /// public key or signature hex cannot be decoded.
    pub fn verify(&self) -> Result<bool, TransactionError> {
        if sha256_hex(self.serialized.as_bytes()) != self.hash {
            return Ok(false);
        }
        verify_hash(&self.hash, &self.public_key, &self.signature)
    }
}

/// Transaction envelope sent to `/transaction`.
///
/// Field names and order are fixed by the SASEUL API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// Transaction hash, known before the node acknowledges it.
    pub thash: String,
    /// Canonical transaction text.
    pub transaction: String,
    pub public_key: String,
    pub signature: String,
}

/// Sign a transaction payload.
pub fn sign_transaction<T: Serialize + ?Sized>(
    transaction: &T,
    account: &Account,
) -> Result<SignedTransaction, TransactionError> {
    let signed = sign_payload(transaction, account)?;
    Ok(SignedTransaction {
        thash: signed.hash,
        transaction: signed.serialized,
        public_key: signed.public_key,
        signature: signed.signature,
    })
}

impl SignedTransaction {
    /// Check `thash` against the transaction text and the signature against `thash`.
    pub fn verify(&self) -> Result<bool, TransactionError> {
        if sha256_hex(self.transaction.as_bytes()) != self.thash {
            return Ok(false);
        }
        verify_hash(&self.thash, &self.public_key, &self.signature)
    }

    /// The envelope as ordered query parameters.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("thash", self.thash.clone()),
            ("transaction", self.transaction.clone()),
            ("public_key", self.public_key.clone()),
            ("signature", self.signature.clone()),
        ]
    }
}

/// Request envelope sent to `/request`. The hash is not transmitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedRequest {
    /// Canonical request text.
    pub request: String,
    pub public_key: String,
    pub signature: String,
}

/// Sign a read request payload.
pub fn sign_request<T: Serialize + ?Sized>(
    request: &T,
    account: &Account,
) -> Result<SignedRequest, TransactionError> {
    let signed = sign_payload(request, account)?;
    Ok(SignedRequest {
        request: signed.serialized,
        public_key: signed.public_key,
        signature: signed.signature,
    })
}

impl SignedRequest {
    /// Check the signature against the hash of the request text.
    pub fn verify(&self) -> Result<bool, TransactionError> {
        let hash = sha256_hex(self.request.as_bytes());
        verify_hash(&hash, &self.public_key, &self.signature)
    }

    /// The envelope as ordered query parameters.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("request", self.request.clone()),
            ("public_key", self.public_key.clone()),
            ("signature", self.signature.clone()),
        ]
    }
}

fn verify_hash(hash: &str, public_key: &str, signature: &str) -> Result<bool, TransactionError> {
    let public_key = PublicKey::from_hex(public_key)?;
    let signature = Signature::from_hex(signature)?;
    Ok(public_key.verify(hash.as_bytes(), &signature))
}
