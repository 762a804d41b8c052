//! Test definitions as read from configuration, and their validated form.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::normalize::Comparable;
use super::operator::ComparisonOperator;
use super::outcome::{Mismatch, Outcome, Success};
use crate::error::{DomainError, DomainResult};
use crate::request::{HttpMethod, TransportCall};

/// One entry of the definitions file.
///
/// Method and operator stay raw strings here; they are parsed once by
/// [`TestDefinition::validate`]. A JSON `null` reads the same as an absent
/// field. Text fields holding another JSON type keep its JSON text, so a
/// wrongly typed entry aborts on its own instead of failing the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestDefinition {
    /// Display label.
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    /// HTTP verb (case-insensitive).
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub method: Option<String>,
    /// Target URL.
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
    /// Request payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    /// Transport options, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    /// Expected response payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<Value>,
    /// Comparison operator name.
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub operator: Option<String>,
}

/// Reads any JSON value as optional text: strings as-is, `null` as absent,
/// anything else as its JSON text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

impl TestDefinition {
    /// Reads one entry of a definitions file.
    ///
    /// An entry that is not an object carries no fields and aborts with a
    /// missing method when run.
    #[must_use]
    pub fn from_entry(entry: Value) -> Self {
        match entry {
            Value::Object(_) => serde_json::from_value(entry).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Creates a definition with a method and URL.
    #[must_use]
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Sets the title (builder pattern).
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the body (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the options (builder pattern).
    #[must_use]
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }

    /// Sets the expectation (builder pattern).
    #[must_use]
    pub fn with_expect(mut self, expect: Value) -> Self {
        self.expect = Some(expect);
        self
    }

    /// Sets the operator (builder pattern).
    #[must_use]
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    /// Parses method and operator, checking the definition can run.
    ///
    /// # Errors
    ///
    /// Checked in order: missing method, unknown method, unknown operator,
    /// missing URL. An empty method counts as missing and an empty operator
    /// as absent.
    pub fn validate(&self) -> DomainResult<ValidatedTest<'_>> {
        let method = self
            .method
            .as_deref()
            .filter(|m| !m.is_empty())
            .ok_or(DomainError::MissingMethod)?
            .parse::<HttpMethod>()?;

        let operator = self
            .operator
            .as_deref()
            .filter(|op| !op.is_empty())
            .map(str::parse::<ComparisonOperator>)
            .transpose()?
            .unwrap_or_default();

        let url = self.url.as_deref().ok_or(DomainError::MissingUrl)?;

        Ok(ValidatedTest {
            method,
            url,
            operator,
            definition: self,
        })
    }

    /// Returns the `METHOD URL` line when both fields are present.
    #[must_use]
    pub fn request_line(&self) -> Option<String> {
        match (&self.method, &self.url) {
            (Some(method), Some(url)) if !method.is_empty() && !url.is_empty() => {
                Some(format!("{} {}", method.to_uppercase(), url))
            }
            _ => None,
        }
    }
}

/// A definition whose method and operator have been parsed.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedTest<'a> {
    /// Parsed verb.
    pub method: HttpMethod,
    /// Target URL.
    pub url: &'a str,
    /// Parsed operator, `eq` when absent.
    pub operator: ComparisonOperator,
    definition: &'a TestDefinition,
}

impl ValidatedTest<'_> {
    /// Returns the positional call to hand to the transport.
    #[must_use]
    pub fn transport_call(&self) -> TransportCall {
        TransportCall::shape(
            self.method,
            self.url,
            self.definition.body.as_ref(),
            self.definition.options.as_ref(),
        )
    }

    /// Returns the expectation, if any.
    #[must_use]
    pub fn expect(&self) -> Option<&Value> {
        self.definition.expect.as_ref()
    }

    /// Judges a response payload against the expectation.
    #[must_use]
    pub fn judge(&self, data: &Value) -> Outcome {
        let Some(expect) = self.expect() else {
            return Outcome::Succeeded(Success::Unverified {
                response: data.clone(),
            });
        };

        let actual = Comparable::normalize(data);
        let expected = Comparable::normalize(expect);

        if self.operator.holds(&actual, &expected) {
            Outcome::Succeeded(Success::Matched {
                operator: self.operator,
                expected: expected.printable(),
            })
        } else {
            Outcome::Failed(Mismatch {
                operator: self.operator,
                expected: expected.printable(),
                actual: actual.printable(),
            })
        }
    }
}
