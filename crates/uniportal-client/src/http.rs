//! Shared response handling.
//!
//! Centralizes status checks, the list/record envelopes the backend wraps
//! payloads in, and the `{ success, message }` acknowledgement so the
//! endpoint modules only build requests and pick a return type.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use uniportal_core::lenient;

use crate::error::ClientError;

/// Turn a non-success status into [`ClientError::Api`].
///
/// The body's `message` (or `error`) is surfaced verbatim; an empty or
/// non-JSON body falls back to the raw text, then to the status reason.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string()),
    })
}

fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(value) => ["message", "error", "msg"]
            .iter()
            .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
            .map(str::to_string),
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Decode a body, naming the route in the error.
pub(crate) fn decode<T: DeserializeOwned>(path: &str, bytes: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice(bytes).map_err(|e| ClientError::Parse {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

/// A list that may arrive bare or as `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

/// A single record that may arrive bare or as `{ "data": {...} }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// Body of a mutation.
///
/// `success` is optional because several routes answer with only a message
/// (or nothing at all) on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    /// Id of the created record, when the route reports one.
    #[serde(
        default,
        alias = "id",
        alias = "insertId",
        alias = "fee_id",
        alias = "feeId",
        deserialize_with = "lenient::opt_id"
    )]
    pub record_id: Option<String>,
}

impl Ack {
    /// Fail with [`ClientError::Rejected`] when the body says `success: false`.
    pub fn ensure(self) -> Result<Self, ClientError> {
        if self.success == Some(false) {
            return Err(ClientError::Rejected(
                self.message.unwrap_or_else(|| "Request was rejected".to_string()),
            ));
        }
        Ok(self)
    }

    /// Stricter than [`Ack::ensure`]: only an explicit `success: true` passes.
    pub fn ensure_confirmed(self) -> Result<Self, ClientError> {
        if self.success == Some(true) {
            return Ok(self);
        }
        Err(ClientError::Rejected(self.message.unwrap_or_else(|| {
            "Server did not confirm the request".to_string()
        })))
    }

    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200, "[]")).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_surfaces_server_message() {
        let resp = mock_response(400, r#"{"success": false, "message": "Email already exists"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 400, .. }));
        assert_eq!(err.to_string(), "Email already exists");
    }

    #[tokio::test]
    async fn check_response_reads_error_key() {
        let resp = mock_response(403, r#"{"error": "Forbidden for role"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert_eq!(err.to_string(), "Forbidden for role");
    }

    #[tokio::test]
    async fn check_response_falls_back_to_text_then_reason() {
        let err = check_response(mock_response(502, "Bad gateway upstream"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Bad gateway upstream");

        let err = check_response(mock_response(500, "")).await.unwrap_err();
        assert_eq!(err.to_string(), "Internal Server Error");
    }

    #[test]
    fn listing_accepts_both_shapes() {
        let bare: Listing<u32> = serde_json::from_str("[1, 2]").unwrap();
        let wrapped: Listing<u32> = serde_json::from_str(r#"{"data": [3]}"#).unwrap();
        assert_eq!(bare.into_vec(), vec![1, 2]);
        assert_eq!(wrapped.into_vec(), vec![3]);
    }

    #[test]
    fn envelope_unwraps_data() {
        let wrapped: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"data": {"id": 1}}"#).unwrap();
        assert_eq!(wrapped.into_inner()["id"], 1);
    }

    #[test]
    fn ack_without_success_passes_ensure_but_not_confirmed() {
        let ack: Ack = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert!(ack.clone().ensure().is_ok());
        assert!(ack.ensure_confirmed().is_err());
    }

    #[test]
    fn ack_false_is_rejected_with_message() {
        let ack: Ack =
            serde_json::from_str(r#"{"success": false, "message": "Seats full"}"#).unwrap();
        let err = ack.ensure().unwrap_err();
        assert!(matches!(err, ClientError::Rejected(ref m) if m == "Seats full"));
    }

    #[test]
    fn ack_reads_numeric_record_id() {
        let ack: Ack = serde_json::from_str(r#"{"success": true, "fee_id": 42}"#).unwrap();
        assert_eq!(ack.record_id.as_deref(), Some("42"));
    }
}
