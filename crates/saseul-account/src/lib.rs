/// SASEUL SDK - Accounts and address handling.
///
/// Derives checksummed SASEUL addresses from Ed25519 public keys, validates
/// address strings, and bundles private key, public key, and address into an
/// immutable [`Account`].

pub mod address;
pub mod account;

mod error;
pub use error::AccountError;
pub use address::Address;
pub use account::Account;
