/// SASEUL SDK - Canonical payload encoding and signing.
///
/// Serializes transactions and requests to canonical JSON, hashes the exact
/// serialized text, and signs that hash with the account key to build the
/// envelopes the SASEUL API accepts.

pub mod canonical;
pub mod signed;
pub mod request;

mod error;
pub use error::TransactionError;
pub use canonical::CanonicalJson;
pub use signed::{
    sign_payload, sign_request, sign_transaction, SignedPayload, SignedRequest, SignedTransaction,
};
pub use request::{timestamp_micros, GetBalance, ProtocolVersion, SendCoin};
