//! Canonical JSON encoding of signable payloads.
//!
//! The hash and signature of a transaction are computed over its serialized
//! text, and the node recomputes the hash from the text it receives. The text
//! therefore has to be produced exactly once, in one well-defined form, and
//! then transmitted unchanged:
//!
//! - compact output, no insignificant whitespace;
//! - object keys in construction order: struct fields in declaration order,
//!   `serde_json::Map` entries in insertion order (the workspace enables
//!   serde_json's `preserve_order`, so `json!` and `Map` keep the order the
//!   caller built). Keys are never sorted.
//!
//! All signing in this crate goes through [`CanonicalJson::new`].

use std::fmt;

use saseul_primitives::hash::sha256_hex;
use serde::Serialize;

use crate::TransactionError;

/// Payload text in its canonical, hash-stable form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanonicalJson(String);

impl CanonicalJson {
    /// Canonicalize any serializable payload.
    ///
    /// # Returns
    /// `SignatureInputError` if the payload cannot be represented as JSON
    /// (e.g. a map with non-string keys).
    pub fn new<T: Serialize + ?Sized>(payload: &T) -> Result<Self, TransactionError> {
        let text = serde_json::to_string(payload)?;
        Ok(CanonicalJson(text))
    }

    /// SHA-256 hex of the canonical text.
    pub fn digest(&self) -> String {
        sha256_hex(self.0.as_bytes())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
