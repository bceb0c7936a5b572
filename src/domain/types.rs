//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty platform id,
//! ordered date range) so that once a value reaches the domain layer it
//! can be treated as trusted.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Date range end precedes its start.
    #[error("date range end precedes start")]
    InvertedDateRange,
}

/// Platform record identifier (the `_id` field on the wire).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Creates an identifier, rejecting empty or whitespace-only input.
    pub fn new(value: impl Into<String>) -> Result<Self, TypeConstraintError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ObjectId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Date filter applied to a list screen.
///
/// The platform API uses the literal sentinel `"All"` for an unbounded
/// range, so the unset case is modeled explicitly rather than as an
/// optional pair.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateRange {
    #[default]
    All,
    Between {
        from: NaiveDate,
        to: NaiveDate,
    },
}

impl DateRange {
    /// Inclusive range over whole days; `from` must not exceed `to`.
    pub fn between(from: NaiveDate, to: NaiveDate) -> Result<Self, TypeConstraintError> {
        if from > to {
            return Err(TypeConstraintError::InvertedDateRange);
        }
        Ok(Self::Between { from, to })
    }

    /// Wire value for the range start (`"All"` when unbounded).
    pub fn start_param(&self) -> String {
        match self {
            Self::All => "All".to_string(),
            Self::Between { from, .. } => from.format("%Y-%m-%d").to_string(),
        }
    }

    /// Wire value for the range end (`"All"` when unbounded).
    pub fn end_param(&self) -> String {
        match self {
            Self::All => "All".to_string(),
            Self::Between { to, .. } => to.format("%Y-%m-%d").to_string(),
        }
    }
}
