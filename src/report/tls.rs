use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Certificate and session details from a completed handshake
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsDetails {
    /// Issuer attributes keyed by short name (`CN`, `O`, `C`, ...)
    pub issuer: BTreeMap<String, String>,
    /// Certificate not-after, formatted like `Jun 10 12:00:00 2025 GMT`
    pub expires: String,
    pub protocol_version: String,
    pub cipher_suite: String,
}

/// Outcome of the TLS probe
///
/// Either the handshake succeeded and `details` is set, or it failed and
/// `error` is set. The constructors are the only way to build one, so both are
/// never populated together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsInfo {
    valid: bool,
    #[serde(flatten)]
    details: Option<TlsDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl TlsInfo {
    /// A probe that completed the handshake
    pub fn success(details: TlsDetails) -> Self {
        Self {
            valid: true,
            details: Some(details),
            error: None,
        }
    }

    /// A probe that did not complete the handshake
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            details: None,
            error: Some(error.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn details(&self) -> Option<&TlsDetails> {
        self.details.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
