//! Expiry hints from the bearer token.
//!
//! The signature is not checked; the backend does that on every call. The
//! client only reads `exp` to tell the user their login has lapsed before a
//! request fails with 401.

use base64::Engine;
use chrono::{DateTime, Utc};

use crate::error::SessionError;

/// Read the `exp` claim of a JWT.
///
/// # Errors
///
/// Returns [`SessionError::Token`] if the token is not a three-part JWT or
/// its payload has no numeric `exp`.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, SessionError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(SessionError::Token("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| SessionError::Token(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| SessionError::Token(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| SessionError::Token("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| SessionError::Token("invalid exp timestamp".into()))
}

/// `Some(true)` when the token has expired, `None` when it carries no
/// readable expiry (opaque tokens are treated as live).
#[must_use]
pub fn is_expired(jwt: &str) -> Option<bool> {
    decode_expiry(jwt).ok().map(|exp| exp <= Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_with_exp(exp: i64) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(r#"{"alg":"HS256"}"#);
        let payload = engine.encode(format!(r#"{{"id":"U1","role":"student","exp":{exp}}}"#));
        let signature = engine.encode("sig");
        format!("{header}.{payload}.{signature}")
    }

    #[test]
    fn reads_exp_claim() {
        let exp = Utc::now().timestamp() + 3600;
        let decoded = decode_expiry(&jwt_with_exp(exp)).unwrap();
        assert_eq!(decoded.timestamp(), exp);
        assert_eq!(is_expired(&jwt_with_exp(exp)), Some(false));
    }

    #[test]
    fn past_exp_is_expired() {
        let exp = Utc::now().timestamp() - 60;
        assert_eq!(is_expired(&jwt_with_exp(exp)), Some(true));
    }

    #[test]
    fn opaque_token_has_no_expiry() {
        let err = decode_expiry("opaque-token").unwrap_err();
        assert!(err.to_string().contains("invalid JWT format"));
        assert_eq!(is_expired("opaque-token"), None);
    }

    #[test]
    fn missing_exp_is_an_error() {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let jwt = format!(
            "{}.{}.{}",
            engine.encode("{}"),
            engine.encode(r#"{"id":"U1"}"#),
            engine.encode("s")
        );
        assert!(decode_expiry(&jwt).unwrap_err().to_string().contains("missing exp"));
    }
}
