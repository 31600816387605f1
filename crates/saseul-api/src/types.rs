//! SASEUL API data types: configuration, response envelope, and receipts.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Environment variable holding the node API base URL.
pub const API_BASE_URL_ENV: &str = "SASEUL_API_BASE_URL";

/// Base URL used when the environment does not set one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Configuration for an [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the node API (e.g. `http://localhost:8080`).
    pub base_url: String,
    /// Whole-request timeout. `None` disables it.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ApiConfig {
    /// Build a configuration from the process environment.
    ///
    /// Reads [`API_BASE_URL_ENV`]; an unset or empty value keeps the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(API_BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config.base_url = url;
        }
        config
    }
}

/// Response envelope of the node API, tagged by its `status` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse {
    /// The call succeeded; `data` is the response body.
    Success {
        /// Response body.
        #[serde(default)]
        data: Value,
    },
    /// The node refused the call.
    Fail {
        /// Reason given by the node.
        #[serde(default, alias = "message")]
        msg: String,
    },
}

impl ApiResponse {
    /// Convert the envelope into the body or a `ServerRejected` error.
    pub fn into_result(self) -> Result<Value, ApiError> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Fail { msg } => Err(ApiError::ServerRejected { message: msg }),
        }
    }
}

/// Outcome of [`SaseulClient::send_transaction`](crate::SaseulClient::send_transaction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    /// Hash computed locally before submission.
    pub thash: String,
    /// The `transaction` field of the node's acknowledgement.
    #[serde(default)]
    pub transaction: Value,
}
