//! Normalization of response and expected values before comparison.
//!
//! Objects, arrays and `null` are serialized to their canonical JSON text
//! (object keys sorted); scalars are kept as they are. Two normalized values
//! then compare as follows:
//!
//! - number with number: numerically
//! - boolean with boolean: `false < true`
//! - anything involving text or a structured value on both sides, or a
//!   structured value on either side: lexicographically on the printable form
//! - a number or boolean with text: the text is read as a number (blank text
//!   reads as `0`); text that is not a number makes the pair incomparable
//!
//! Lexicographic ordering of structured values means `[10] < [9]`.

use std::cmp::Ordering;
use std::fmt;

use serde_json::{Number, Value};

/// A scalar JSON value kept in its native form.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// `true` or `false`.
    Bool(bool),
    /// A JSON number.
    Number(Number),
    /// A JSON string.
    Text(String),
}

impl Scalar {
    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Bool(b) => Some(f64::from(u8::from(*b))),
            Self::Number(n) => n.as_f64(),
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
                }
            }
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Rebuilds `value` with every object's keys inserted in sorted order, so
/// the serialized text does not depend on the map's iteration order.
fn canonical(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, item)| (key.clone(), canonical(item)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(canonical).collect()),
        other => other.clone(),
    }
}

/// A value in the form used for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparable {
    /// A scalar, compared natively.
    Scalar(Scalar),
    /// A structured value, compared as its serialized text.
    Structured(String),
}

impl Comparable {
    /// Normalizes a JSON value.
    #[must_use]
    pub fn normalize(value: &Value) -> Self {
        match value {
            Value::Bool(b) => Self::Scalar(Scalar::Bool(*b)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n.clone())),
            Value::String(s) => Self::Scalar(Scalar::Text(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                Self::Structured(canonical(value).to_string())
            }
        }
    }

    /// Returns the printable form used in reports.
    #[must_use]
    pub fn printable(&self) -> String {
        self.to_string()
    }

    /// Orders `self` against `other`; `None` when the pair is incomparable.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Scalar(Scalar::Number(a)), Self::Scalar(Scalar::Number(b))) => {
                a.as_f64()?.partial_cmp(&b.as_f64()?)
            }
            (Self::Scalar(Scalar::Bool(a)), Self::Scalar(Scalar::Bool(b))) => Some(a.cmp(b)),
            (Self::Scalar(Scalar::Text(a)), Self::Scalar(Scalar::Text(b))) => Some(a.cmp(b)),
            (Self::Structured(_), _) | (_, Self::Structured(_)) => {
                Some(self.printable().cmp(&other.printable()))
            }
            (Self::Scalar(a), Self::Scalar(b)) => a.as_number()?.partial_cmp(&b.as_number()?),
        }
    }
}

impl fmt::Display for Comparable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => write!(f, "{scalar}"),
            Self::Structured(text) => f.write_str(text),
        }
    }
}
