/// SASEUL address handling.
///
/// An address is the text `0x6f`, followed by a 40-char RIPEMD-160 hex digest
/// derived from the public key, followed by a 4-char checksum.
///
/// Every hash in the pipeline is taken over the UTF-8 bytes of *hex text*
/// (the salted public key hex, then the SHA-256 hex digest), never over the
/// decoded bytes. Existing SASEUL nodes derive addresses this way, so it must
/// not be "corrected".

use std::fmt;

use saseul_primitives::ed::PublicKey;
use saseul_primitives::hash::{ripemd160_hex, sha256_hex};

use crate::AccountError;

/// Network prefix text that starts every address.
pub const ADDRESS_PREFIX: &str = "0x6f";
/// Salt text prepended to the public key hex before hashing.
pub const ADDRESS_SALT_PREFIX: &str = "0x00";
/// Number of hex characters in the checksum.
pub const CHECKSUM_LEN: usize = 4;
/// Number of hex characters in the public key hash.
const HASH_LEN: usize = 40;
/// Total address length in characters.
pub const ADDRESS_LEN: usize = ADDRESS_PREFIX.len() + HASH_LEN + CHECKSUM_LEN;

/// A SASEUL account address.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    /// The full address string, checksum included.
    pub address_string: String,
    /// The 40-char RIPEMD-160 hex digest between prefix and checksum.
    pub public_key_hash: String,
}

impl Address {
    /// Parse and validate an address string.
    ///
    /// Checks the length, the `0x6f` prefix, that hash and checksum are
    /// lowercase hex, and that the checksum matches the body.
    pub fn from_string(addr: &str) -> Result<Self, AccountError> {
        if addr.len() != ADDRESS_LEN {
            return Err(AccountError::InvalidAddressLength(addr.to_string()));
        }
        if !addr.starts_with(ADDRESS_PREFIX) {
            return Err(AccountError::InvalidAddress(format!(
                "'{}' does not start with {}",
                addr, ADDRESS_PREFIX
            )));
        }

        let tail = &addr[ADDRESS_PREFIX.len()..];
        if !is_lower_hex(tail) {
            return Err(AccountError::InvalidAddress(format!(
                "'{}' contains non-hex characters",
                addr
            )));
        }

        let (body, got) = addr.split_at(ADDRESS_LEN - CHECKSUM_LEN);
        let expected = checksum(body);
        if got != expected {
            return Err(AccountError::ChecksumMismatch {
                expected,
                got: got.to_string(),
            });
        }

        Ok(Address {
            address_string: addr.to_string(),
            public_key_hash: tail[..HASH_LEN].to_string(),
        })
    }

    /// Derive the address of a public key.
    pub fn from_public_key(pub_key: &PublicKey) -> Self {
        Self::from_public_key_hash(&public_key_hash(&pub_key.to_hex()))
    }

    /// Derive the address of a hex-encoded public key.
    ///
    /// The hex must decode to a valid Ed25519 public key. The text is hashed
    /// exactly as given, so uppercase hex yields a different address than the
    /// lowercase form.
    pub fn from_public_key_string(pub_key_hex: &str) -> Result<Self, AccountError> {
        PublicKey::from_hex(pub_key_hex)?;
        Ok(Self::from_public_key_hash(&public_key_hash(pub_key_hex)))
    }

    fn from_public_key_hash(hash: &str) -> Self {
        let body = format!("{}{}", ADDRESS_PREFIX, hash);
        let address_string = format!("{}{}", body, checksum(&body));
        Address {
            address_string,
            public_key_hash: hash.to_string(),
        }
    }

    /// The address text without its checksum.
    pub fn body(&self) -> &str {
        &self.address_string[..ADDRESS_LEN - CHECKSUM_LEN]
    }

    /// The trailing 4-char checksum.
    pub fn checksum(&self) -> &str {
        &self.address_string[ADDRESS_LEN - CHECKSUM_LEN..]
    }

    pub fn as_str(&self) -> &str {
        &self.address_string
    }
}

/// RIPEMD-160 hex of the SHA-256 hex of the salted public key hex.
fn public_key_hash(pub_key_hex: &str) -> String {
    let salted = format!("{}{}", ADDRESS_SALT_PREFIX, pub_key_hex);
    let digest = sha256_hex(salted.as_bytes());
    ripemd160_hex(digest.as_bytes())
}

/// First 4 hex chars of SHA-256 hex of SHA-256 hex of `body`.
pub fn checksum(body: &str) -> String {
    let once = sha256_hex(body.as_bytes());
    let mut twice = sha256_hex(once.as_bytes());
    twice.truncate(CHECKSUM_LEN);
    twice
}

fn is_lower_hex(s: &str) -> bool {
    s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address_string)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.address_string
    }
}
