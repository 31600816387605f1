//! Request transport for the SASEUL node API.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::types::{ApiConfig, ApiResponse};

/// Delivers a request to a node endpoint and returns the decoded body.
///
/// Implementations own retry and timeout policy; the client issues exactly
/// one call per operation.
pub trait Transport {
    /// Send `params` to `path` and return the response body.
    ///
    /// A node-reported failure must surface as [`ApiError::ServerRejected`].
    fn request(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> impl std::future::Future<Output = Result<Value, ApiError>> + Send;
}

/// HTTP transport: one GET per request with the params as query string.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Transport configuration.
    config: ApiConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { config, client })
    }

    /// The active configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Transport for HttpTransport {
    async fn request(&self, path: &str, params: &[(&str, String)]) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!(%url, "sending API request");

        let resp = self.client.get(&url).query(params).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        let result = decode_response(status, &text);
        if let Err(ApiError::ServerRejected { ref message }) = result {
            warn!(%url, %status, %message, "node rejected request");
        }
        result
    }
}

/// Decode a response body.
///
/// Bodies tagged with `status` go through [`ApiResponse`]; untagged JSON
/// bodies are returned verbatim on HTTP success. Non-2xx responses that are
/// not a tagged envelope become `ServerRejected` with the body text.
pub(crate) fn decode_response(status: StatusCode, text: &str) -> Result<Value, ApiError> {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) if status.is_success() => return Err(ApiError::Decode(e)),
        Err(_) => return Err(rejected(status, text)),
    };

    if value.get("status").is_some() {
        return ApiResponse::deserialize(&value)?.into_result();
    }

    if status.is_success() {
        Ok(value)
    } else {
        Err(rejected(status, text))
    }
}

fn rejected(status: StatusCode, text: &str) -> ApiError {
    let message = if text.trim().is_empty() {
        status.to_string()
    } else {
        text.to_string()
    };
    ApiError::ServerRejected { message }
}
