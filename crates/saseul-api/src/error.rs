//! Error types for SASEUL API operations.

use saseul_transaction::TransactionError;

/// Errors that can occur when talking to a SASEUL node.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network or connection failure, passed through from the HTTP client.
    #[error("transport failure: {0}")]
    TransportFailure(#[from] reqwest::Error),

    /// The node answered with an explicit failure.
    #[error("server rejected request: {message}")]
    ServerRejected {
        /// Message text reported by the node.
        message: String,
    },

    /// The response body did not match the API schema.
    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The payload could not be signed.
    #[error("signing error: {0}")]
    Signing(#[from] TransactionError),
}
