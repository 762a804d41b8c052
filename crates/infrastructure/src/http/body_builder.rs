//! HTTP request body builder.
//!
//! Turns the payload of a [`TransportCall`](apicheck_domain::TransportCall)
//! into bytes and a content type.

use apicheck_application::TransportError;
use serde_json::Value;

/// Result of building a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltBody {
    /// No body.
    None,
    /// Encoded body with its content type.
    Text {
        /// Encoded content.
        content: String,
        /// Content-Type header value.
        content_type: &'static str,
    },
}

/// Builds an HTTP body from a payload value.
///
/// Strings are sent raw as `text/plain`; any other value is serialized as
/// JSON. An absent or `null` payload sends no body.
///
/// # Errors
///
/// Returns `TransportError::Other` if JSON serialization fails.
pub fn build_body(payload: Option<&Value>) -> Result<BuiltBody, TransportError> {
    match payload {
        None | Some(Value::Null) => Ok(BuiltBody::None),
        Some(Value::String(text)) => Ok(BuiltBody::Text {
            content: text.clone(),
            content_type: "text/plain",
        }),
        Some(value) => {
            let content = serde_json::to_string(value)
                .map_err(|e| TransportError::Other(format!("Failed to encode body: {e}")))?;
            Ok(BuiltBody::Text {
                content,
                content_type: "application/json",
            })
        }
    }
}

impl BuiltBody {
    /// Get the Content-Type header value.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Text { content_type, .. } => Some(content_type),
            Self::None => None,
        }
    }
}
