//! Response types
//!
//! The response as the evaluator sees it: status, decoded payload and
//! elapsed time.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

/// How a response body is decoded into `data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    /// Parse as JSON when possible, otherwise keep the text.
    #[default]
    Json,
    /// Always keep the raw text.
    Text,
}

impl ResponseType {
    /// Decodes a raw body into a payload value.
    ///
    /// Invalid UTF-8 is replaced lossily. An empty body decodes to `""`.
    #[must_use]
    pub fn decode(self, body: &[u8]) -> Value {
        let text = String::from_utf8_lossy(body);
        match self {
            Self::Json if !text.trim().is_empty() => {
                serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text.into_owned()))
            }
            _ => Value::String(text.into_owned()),
        }
    }
}

/// HTTP response as seen by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: u16,
    /// Decoded response payload.
    pub data: Value,
    /// Response time.
    pub duration: Duration,
}

impl ResponseSpec {
    /// Creates a response by decoding a raw body.
    #[must_use]
    pub fn new(status: u16, body: &[u8], duration: Duration, response_type: ResponseType) -> Self {
        Self {
            status,
            data: response_type.decode(body),
            duration,
        }
    }

    /// Creates a response carrying only a payload.
    #[must_use]
    pub const fn with_data(data: Value) -> Self {
        Self {
            status: 200,
            data,
            duration: Duration::ZERO,
        }
    }
}
