/// Error types for payload encoding and signing.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The payload could not be serialized to JSON.
    #[error("payload is not serializable: {0}")]
    SignatureInputError(#[from] serde_json::Error),
    /// A key or signature in an envelope could not be decoded.
    #[error("primitives error: {0}")]
    Primitives(#[from] saseul_primitives::PrimitivesError),
}
