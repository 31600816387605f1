/// Error types for account and address operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// Seed or key decoding failed (includes `InvalidSeedFormat`).
    #[error(transparent)]
    Primitives(#[from] saseul_primitives::PrimitivesError),

    /// Address string is not a SASEUL address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Address string has the wrong number of characters.
    #[error("invalid address length for '{0}'")]
    InvalidAddressLength(String),

    /// Trailing checksum does not match the address body.
    #[error("address checksum mismatch: expected {expected}, got {got}")]
    ChecksumMismatch { expected: String, got: String },
}
