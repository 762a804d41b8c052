//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port. It reads the positional
//! arguments of a [`TransportCall`] per verb, applies the options object and
//! decodes the response payload.

use std::error::Error as _;
use std::time::Instant;

use apicheck_application::ports::{HttpTransport, TransportError};
use apicheck_domain::{HttpMethod, ResponseSpec, TransportCall};
use async_trait::async_trait;
use reqwest::{Client, Method};
use tracing::debug;

use crate::http::{BuiltBody, TransportOptions, build_body};

/// Redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("apicheck/", env!("CARGO_PKG_VERSION"));

/// HTTP transport backed by a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the default user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    /// Creates a transport sending `user_agent`.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - No timeout unless a test sets one
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn with_user_agent(user_agent: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a transport around a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }

        let host = || {
            error
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or("unknown")
                .to_string()
        };

        if error.is_connect() {
            let message = describe(error);
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return TransportError::DnsError {
                    host: host(),
                    message,
                };
            }
            if lowered.contains("refused") {
                return TransportError::ConnectionRefused {
                    host: host(),
                    port: error
                        .url()
                        .and_then(reqwest::Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return TransportError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return TransportError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        TransportError::Other(describe(error))
    }
}

/// Joins an error with its sources into one line.
fn describe(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, call: &TransportCall) -> Result<ResponseSpec, TransportError> {
        let options = TransportOptions::from_value(call.options())?;
        let url = options.resolve_url(&call.url)?;
        let timeout = options.timeout();
        let timeout_ms = options.timeout.unwrap_or_default();

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(call.method), url);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let headers = options.header_pairs()?;
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }

        if let Some(auth) = &options.auth {
            builder = builder.basic_auth(&auth.username, Some(&auth.password));
        }

        // Verbs without a positional payload fall back to `options.data`.
        let body = build_body(call.payload().or(options.data.as_ref()))?;
        if let Some(content_type) = body.content_type() {
            let has_content_type = headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case("content-type"));
            if !has_content_type {
                builder = builder.header("Content-Type", content_type);
            }
        }
        if let BuiltBody::Text { content, .. } = body {
            builder = builder.body(content);
        }

        let start = Instant::now();
        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, url = %call.url, "non-success status");
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let body_bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(format!("Failed to read body: {e}")))?;
        let duration = start.elapsed();

        debug!(
            status = status.as_u16(),
            bytes = body_bytes.len(),
            elapsed_ms = duration.as_millis(),
            "response read"
        );

        Ok(ResponseSpec::new(
            status.as_u16(),
            &body_bytes,
            duration,
            options.response_type.unwrap_or_default(),
        ))
    }
}
