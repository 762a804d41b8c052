//! Transport options read from a test definition's `options` object.

use std::collections::BTreeMap;
use std::time::Duration;

use apicheck_application::TransportError;
use apicheck_domain::ResponseType;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// Credentials for HTTP basic auth.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BasicAuth {
    /// User name.
    pub username: String,
    /// Password.
    #[serde(default)]
    pub password: String,
}

/// Options the transport understands. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOptions {
    /// Extra request headers.
    #[serde(default)]
    pub headers: BTreeMap<String, Value>,
    /// Query parameters appended to the URL.
    #[serde(default)]
    pub params: BTreeMap<String, Value>,
    /// Timeout in milliseconds; `0` disables it.
    #[serde(default)]
    pub timeout: Option<u64>,
    /// Basic auth credentials.
    #[serde(default)]
    pub auth: Option<BasicAuth>,
    /// Prefix for relative URLs.
    #[serde(default, rename = "baseURL")]
    pub base_url: Option<String>,
    /// Payload for verbs whose options sit in the second position.
    #[serde(default)]
    pub data: Option<Value>,
    /// How to decode the response body.
    #[serde(default)]
    pub response_type: Option<ResponseType>,
}

impl TransportOptions {
    /// Reads options from the raw positional argument.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::InvalidOptions` if the value is not an object
    /// or a known key has the wrong type.
    pub fn from_value(value: Option<&Value>) -> Result<Self, TransportError> {
        match value {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(object @ Value::Object(_)) => Self::deserialize(object)
                .map_err(|e| TransportError::InvalidOptions(e.to_string())),
            Some(other) => Err(TransportError::InvalidOptions(format!(
                "expected an object, got {other}"
            ))),
        }
    }

    /// Returns the timeout, if one applies.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    /// Returns header pairs with values rendered as text.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::InvalidOptions` for structured header values.
    pub fn header_pairs(&self) -> Result<Vec<(String, String)>, TransportError> {
        let mut pairs = Vec::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            for rendered in render_scalars(name, value)? {
                pairs.push((name.clone(), rendered));
            }
        }
        Ok(pairs)
    }

    /// Resolves the final URL: joins `baseURL` for relative URLs and appends
    /// `params`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::InvalidUrl` if the result does not parse.
    pub fn resolve_url(&self, url: &str) -> Result<Url, TransportError> {
        let joined = match &self.base_url {
            Some(base) if !is_absolute(url) => combine(base, url),
            _ => url.to_string(),
        };

        let mut parsed =
            Url::parse(&joined).map_err(|e| TransportError::InvalidUrl(format!("{e}: {joined}")))?;

        if !self.params.is_empty() {
            let mut pairs = Vec::new();
            for (name, value) in &self.params {
                for rendered in render_scalars(name, value)? {
                    pairs.push((name.clone(), rendered));
                }
            }
            parsed.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(parsed)
    }
}

fn is_absolute(url: &str) -> bool {
    url.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c))
    })
}

fn combine(base: &str, relative: &str) -> String {
    if relative.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}

/// Renders a header or query value; arrays repeat the key and `null` is
/// skipped.
fn render_scalars(name: &str, value: &Value) -> Result<Vec<String>, TransportError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Bool(_) | Value::Number(_) => Ok(vec![value.to_string()]),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Array(_) | Value::Object(_) => Err(nested(name)),
                Value::String(s) => Ok(s.clone()),
                other => Ok(other.to_string()),
            })
            .collect(),
        Value::Object(_) => Err(nested(name)),
    }
}

fn nested(name: &str) -> TransportError {
    TransportError::InvalidOptions(format!("value for '{name}' must be a scalar"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_absent_options_are_default() {
        assert_eq!(TransportOptions::from_value(None).unwrap(), TransportOptions::default());
        assert_eq!(
            TransportOptions::from_value(Some(&Value::Null)).unwrap(),
            TransportOptions::default()
        );
    }

    #[test]
    fn test_non_object_is_rejected() {
        let result = TransportOptions::from_value(Some(&json!([1, 2])));
        assert!(matches!(result, Err(TransportError::InvalidOptions(_))));
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result = TransportOptions::from_value(Some(&json!({"timeout": "soon"})));
        assert!(matches!(result, Err(TransportError::InvalidOptions(_))));
    }

    #[test]
    fn test_reads_known_keys_and_ignores_others() {
        let options = TransportOptions::from_value(Some(&json!({
            "headers": {"X-Token": "abc", "X-Count": 2},
            "params": {"page": 1},
            "timeout": 250,
            "auth": {"username": "u", "password": "p"},
            "baseURL": "http://api.local/v1/",
            "responseType": "text",
            "withCredentials": true
        })))
        .unwrap();

        assert_eq!(options.timeout(), Some(Duration::from_millis(250)));
        assert_eq!(options.response_type, Some(ResponseType::Text));
        assert_eq!(
            options.auth,
            Some(BasicAuth {
                username: "u".to_string(),
                password: "p".to_string()
            })
        );
        assert_eq!(
            options.header_pairs().unwrap(),
            vec![
                ("X-Count".to_string(), "2".to_string()),
                ("X-Token".to_string(), "abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let options = TransportOptions::from_value(Some(&json!({"timeout": 0}))).unwrap();
        assert_eq!(options.timeout(), None);
    }

    #[test]
    fn test_structured_header_is_rejected() {
        let options = TransportOptions::from_value(Some(&json!({"headers": {"X": {"a": 1}}}))).unwrap();
        assert!(matches!(
            options.header_pairs(),
            Err(TransportError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_resolve_url_with_base_and_params() {
        let options = TransportOptions::from_value(Some(&json!({
            "baseURL": "http://api.local/v1/",
            "params": {"page": 2, "tag": ["a", "b"], "skip": null}
        })))
        .unwrap();

        let url = options.resolve_url("/users").unwrap();
        assert_eq!(url.as_str(), "http://api.local/v1/users?page=2&tag=a&tag=b");
    }

    #[test]
    fn test_absolute_url_ignores_base() {
        let options =
            TransportOptions::from_value(Some(&json!({"baseURL": "http://api.local"}))).unwrap();
        let url = options.resolve_url("https://other.local/x").unwrap();
        assert_eq!(url.as_str(), "https://other.local/x");
    }

    #[test]
    fn test_invalid_url() {
        let result = TransportOptions::default().resolve_url("not a url");
        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }
}
