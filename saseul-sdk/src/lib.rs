#![deny(missing_docs)]

//! SASEUL SDK - Complete SDK.
//!
//! Re-exports all SASEUL SDK components for convenient single-crate usage.

pub use saseul_primitives as primitives;
pub use saseul_account as account;
pub use saseul_transaction as transaction;
pub use saseul_api as api;

pub use saseul_account::{Account, Address};
pub use saseul_api::{ApiConfig, ApiError, SaseulClient};
pub use saseul_transaction::{sign_request, sign_transaction, SignedRequest, SignedTransaction};
