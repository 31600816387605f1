/// SASEUL SDK - Cryptographic primitives.
///
/// This crate provides the foundational building blocks for the SASEUL SDK:
/// - Hash functions (SHA-256, RIPEMD-160) with lowercase hex output
/// - Ed25519 seeds, private keys, public keys, and detached signatures
/// - Seed generation from OS entropy plus a timestamp suffix

pub mod hash;
pub mod ed;

mod error;
pub use error::PrimitivesError;
