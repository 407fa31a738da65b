/**
 * Backend Response Normalizer
 *
 * The backend reports failures as `{"detail": ...}` where `detail` is either
 * a structured `{msg, error_code}` object, a plain string, or some other
 * JSON value (validation errors arrive as arrays). This module folds every
 * shape into an `ErrorEnvelope`.
 *
 * # Precedence
 *
 * 1. Structured detail (truthy `msg` and `error_code`) is passed through;
 *    non-string values are carried as their JSON text
 * 2. Any other present detail becomes the message, coded `INVALID_INPUT`
 * 3. Missing detail or an unparseable body yields the fallback message,
 *    coded `INVALID_INPUT`
 *
 * The proxy never invents a code the backend did not send.
 */
use serde_json::Value;

use crate::shared::{ErrorCode, ErrorEnvelope};

/// Classification of a backend error body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendFailure {
    /// `detail` carried truthy `msg` and `error_code`
    Structured(ErrorEnvelope),
    /// `detail` was present but not structured
    Detail(String),
    /// No usable `detail`, or the body was not JSON
    Unclassified,
}

impl BackendFailure {
    /// Classify a raw backend response body
    pub fn parse(body: &[u8]) -> Self {
        let Ok(value) = serde_json::from_slice::<Value>(body) else {
            return Self::Unclassified;
        };
        let Some(detail) = value.get("detail").filter(|detail| is_truthy(detail)) else {
            return Self::Unclassified;
        };

        if detail.is_object() {
            let msg = detail.get("msg").filter(|msg| is_truthy(msg));
            let code = detail.get("error_code").filter(|code| is_truthy(code));
            if let (Some(msg), Some(code)) = (msg, code) {
                return Self::Structured(ErrorEnvelope::new(
                    text_of(msg),
                    ErrorCode::from(text_of(code)),
                ));
            }
        }

        Self::Detail(text_of(detail))
    }

    /// Turn the classification into an envelope
    pub fn into_envelope(self, fallback: &str) -> ErrorEnvelope {
        match self {
            Self::Structured(envelope) => envelope,
            Self::Detail(msg) => ErrorEnvelope::invalid_input(msg),
            Self::Unclassified => ErrorEnvelope::invalid_input(fallback),
        }
    }
}

/// Normalize a non-success backend body into an `ErrorEnvelope`
pub fn normalize_backend_error(body: &[u8], fallback: &str) -> ErrorEnvelope {
    BackendFailure::parse(body).into_envelope(fallback)
}

// Strings as-is, anything else as JSON text.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

// Matches how the web client treated `detail`: null, false, 0 and "" mean absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
