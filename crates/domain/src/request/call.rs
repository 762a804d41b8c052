//! Positional transport call shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::HttpMethod;

/// A single HTTP call in the positional form the transport consumes:
/// `(url, second, third)`.
///
/// Verbs without a payload read `second` as their options object; verbs with
/// a payload read `second` as the payload and `third` as the options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportCall {
    /// Verb selecting the transport operation.
    pub method: HttpMethod,
    /// Target URL.
    pub url: String,
    /// Second positional argument.
    pub second: Option<Value>,
    /// Third positional argument.
    pub third: Option<Value>,
}

impl TransportCall {
    /// Binds body and options to positional arguments.
    ///
    /// - body present: `(url, body, options)`
    /// - options only: `(url, options, null)`
    /// - neither: `(url, null, null)`
    #[must_use]
    pub fn shape(
        method: HttpMethod,
        url: impl Into<String>,
        body: Option<&Value>,
        options: Option<&Value>,
    ) -> Self {
        let (second, third) = match (body, options) {
            (Some(body), options) => (Some(body.clone()), options.cloned()),
            (None, Some(options)) => (Some(options.clone()), None),
            (None, None) => (None, None),
        };

        Self {
            method,
            url: url.into(),
            second,
            third,
        }
    }

    /// Returns the payload the transport will send, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        if self.method.takes_payload() {
            self.second.as_ref()
        } else {
            None
        }
    }

    /// Returns the options object the transport will apply, if any.
    #[must_use]
    pub fn options(&self) -> Option<&Value> {
        if self.method.takes_payload() {
            self.third.as_ref()
        } else {
            self.second.as_ref()
        }
    }
}
