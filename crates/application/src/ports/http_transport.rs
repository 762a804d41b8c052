//! HTTP transport port

use async_trait::async_trait;
use thiserror::Error;

use apicheck_domain::{ResponseSpec, TransportCall};

/// Errors a transport can fail with.
///
/// The `Display` form is the message shown in reports.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request exceeded its configured timeout.
    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The server answered with a status outside 2xx.
    #[error("Request failed with status code {status}")]
    Status {
        /// Status code received.
        status: u16,
    },

    /// The host refused the connection.
    #[error("connection refused: {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The host name could not be resolved.
    #[error("could not resolve host {host}: {message}")]
    DnsError {
        /// Target host.
        host: String,
        /// Underlying message.
        message: String,
    },

    /// Connecting failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The options object could not be applied.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// The redirect limit was reached.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Redirect limit.
        max: usize,
    },

    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

/// Port for performing HTTP calls.
///
/// Implementations expose one operation per verb through
/// [`TransportCall::method`] and read the positional arguments the way
/// [`TransportCall::payload`] and [`TransportCall::options`] describe.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Performs the call and returns the response.
    ///
    /// # Errors
    ///
    /// Returns an error on network failures, timeouts, invalid options, or a
    /// non-2xx status.
    async fn send(&self, call: &TransportCall) -> Result<ResponseSpec, TransportError>;
}
