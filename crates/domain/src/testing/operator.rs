//! Comparison operators.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::normalize::Comparable;
use crate::error::{DomainError, DomainResult};

/// Relation applied between the response and the expectation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonOperator {
    /// Equal to.
    #[default]
    Eq,
    /// Not equal to.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal to.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal to.
    Lte,
}

impl ComparisonOperator {
    /// Returns all operators.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Eq, Self::Ne, Self::Gt, Self::Gte, Self::Lt, Self::Lte]
    }

    /// Returns the operator's configuration name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
        }
    }

    /// Word joining the operator to its operand in reports ("greater than",
    /// "equal to").
    #[must_use]
    pub const fn preposition(&self) -> &'static str {
        match self {
            Self::Gt | Self::Lt => "than",
            Self::Eq | Self::Ne | Self::Gte | Self::Lte => "to",
        }
    }

    /// Returns whether `actual <op> expected` holds.
    #[must_use]
    pub fn holds(&self, actual: &Comparable, expected: &Comparable) -> bool {
        let ordering = actual.compare(expected);
        match self {
            Self::Eq => ordering == Some(Ordering::Equal),
            Self::Ne => ordering != Some(Ordering::Equal),
            Self::Gt => ordering == Some(Ordering::Greater),
            Self::Gte => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
            Self::Lt => ordering == Some(Ordering::Less),
            Self::Lte => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonOperator {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "eq" => Ok(Self::Eq),
            "ne" => Ok(Self::Ne),
            "gt" => Ok(Self::Gt),
            "gte" => Ok(Self::Gte),
            "lt" => Ok(Self::Lt),
            "lte" => Ok(Self::Lte),
            other => Err(DomainError::UnknownOperator(other.to_string())),
        }
    }
}
