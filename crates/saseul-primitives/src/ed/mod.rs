/// Ed25519 keys and signatures for SASEUL accounts.
///
/// The 32-byte private key *is* the Ed25519 seed: the public key and every
/// signature are derived from it deterministically.

pub mod seed;
pub mod private_key;
pub mod public_key;
pub mod signature;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use seed::generate_seed;
pub use signature::Signature;
