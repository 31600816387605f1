#![deny(missing_docs)]

//! # saseul-api
//!
//! Async client for the SASEUL node API: submits signed transactions and
//! requests and runs public read queries.
//!
//! The HTTP layer sits behind the [`Transport`] trait, so the client can be
//! driven by [`HttpTransport`] or by any other implementation.
//!
//! # Example
//!
//! ```no_run
//! use saseul_account::Account;
//! use saseul_api::{ApiConfig, SaseulClient};
//!
//! # async fn example() -> Result<(), saseul_api::ApiError> {
//! let client = SaseulClient::new(ApiConfig {
//!     base_url: "http://localhost:8080".to_string(),
//!     ..Default::default()
//! })?;
//!
//! let account = Account::generate();
//! let balance = client.get_balance(&account).await?;
//! println!("balance: {}", balance);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod transport;
pub mod types;


pub use client::SaseulClient;
pub use error::ApiError;
pub use transport::{HttpTransport, Transport};
pub use types::{ApiConfig, ApiResponse, TransactionReceipt};
