//! SASEUL node client: signed submissions and public queries.

use saseul_account::Account;
use saseul_transaction::{sign_request, sign_transaction, GetBalance, ProtocolVersion};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;
use crate::transport::{HttpTransport, Transport};
use crate::types::{ApiConfig, TransactionReceipt};

/// Endpoint accepting signed transactions.
const TRANSACTION_PATH: &str = "/transaction";
/// Endpoint accepting signed read requests.
const REQUEST_PATH: &str = "/request";
/// Public transaction history endpoint.
const TRANSACTIONS_PATH: &str = "/simple/gettransactions";

/// Client for the SASEUL node API.
///
/// Every method signs locally (where needed) and issues exactly one call on
/// the injected transport. Nothing is retried, batched, or cached.
#[derive(Debug, Clone)]
pub struct SaseulClient<T = HttpTransport> {
    /// Transport used for every call.
    transport: T,
}

impl SaseulClient<HttpTransport> {
    /// Create a client backed by an [`HttpTransport`].
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Create an HTTP client configured from `SASEUL_API_BASE_URL`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env())
    }
}

impl<T: Transport> SaseulClient<T> {
    /// Create a client over any transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sign and submit a transaction.
    ///
    /// Returns the locally computed `thash` together with the `transaction`
    /// field of the node's acknowledgement.
    pub async fn send_transaction<P: Serialize + ?Sized>(
        &self,
        transaction: &P,
        account: &Account,
    ) -> Result<TransactionReceipt, ApiError> {
        let signed = sign_transaction(transaction, account)?;
        debug!(thash = %signed.thash, "submitting transaction");

        let body = self
            .transport
            .request(TRANSACTION_PATH, &signed.to_params())
            .await?;

        Ok(TransactionReceipt {
            thash: signed.thash,
            transaction: body.get("transaction").cloned().unwrap_or(Value::Null),
        })
    }

    /// Sign and submit a read request, returning the node's body verbatim.
    pub async fn send_request<P: Serialize + ?Sized>(
        &self,
        request: &P,
        account: &Account,
    ) -> Result<Value, ApiError> {
        let signed = sign_request(request, account)?;
        self.transport.request(REQUEST_PATH, &signed.to_params()).await
    }

    /// Query the balance of `account` with the default protocol version.
    pub async fn get_balance(&self, account: &Account) -> Result<Value, ApiError> {
        self.get_balance_with_version(account, ProtocolVersion::default())
            .await
    }

    /// Query the balance of `account` with an explicit protocol version.
    pub async fn get_balance_with_version(
        &self,
        account: &Account,
        version: ProtocolVersion,
    ) -> Result<Value, ApiError> {
        let request = GetBalance::new(version, account.address().as_str());
        self.send_request(&request, account).await
    }

    /// Fetch the public transaction history of `address`. Unsigned.
    pub async fn get_transactions(&self, address: &str) -> Result<Value, ApiError> {
        let params = [("address", address.to_string())];
        self.transport.request(TRANSACTIONS_PATH, &params).await
    }
}
