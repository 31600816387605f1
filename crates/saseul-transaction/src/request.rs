//! Typed SASEUL payloads.
//!
//! Field declaration order is the wire order; do not reorder fields, the
//! transaction hash depends on it.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Protocol version string carried in every payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolVersion {
    #[default]
    #[serde(rename = "0.5")]
    V0_5,
    #[serde(rename = "1.0")]
    V1_0,
}

impl ProtocolVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V0_5 => "0.5",
            Self::V1_0 => "1.0",
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Microseconds since the UNIX epoch.
pub fn timestamp_micros() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or_default()
}

/// Balance query for an address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBalance {
    pub version: ProtocolVersion,
    /// Always `"GetBalance"`.
    pub r#type: String,
    pub from: String,
    /// Microseconds since the UNIX epoch.
    pub timestamp: u64,
}

impl GetBalance {
    /// Build a balance query for `from`, stamped with the current time.
    pub fn new(version: ProtocolVersion, from: impl Into<String>) -> Self {
        GetBalance {
            version,
            r#type: "GetBalance".to_string(),
            from: from.into(),
            timestamp: timestamp_micros(),
        }
    }
}

/// Coin transfer transaction.
///
/// `amount` and `fee` are decimal strings; the node interprets them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendCoin {
    pub version: ProtocolVersion,
    /// Always `"SendCoin"`.
    pub r#type: String,
    pub from: String,
    pub to: String,
    pub amount: String,
    pub fee: String,
    /// Microseconds since the UNIX epoch.
    pub timestamp: u64,
}

impl SendCoin {
    /// Build a transfer stamped with the current time.
    pub fn new(
        version: ProtocolVersion,
        from: impl Into<String>,
        to: impl Into<String>,
        amount: impl Into<String>,
        fee: impl Into<String>,
    ) -> Self {
        SendCoin {
            version,
            r#type: "SendCoin".to_string(),
            from: from.into(),
            to: to.into(),
            amount: amount.into(),
            fee: fee.into(),
            timestamp: timestamp_micros(),
        }
    }
}
