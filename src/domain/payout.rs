//! Host payout requests awaiting review.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ObjectId, TypeConstraintError};
use crate::pagination::Identified;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    Pending,
    Approved,
    Rejected,
}

impl PayoutStatus {
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl FromStr for PayoutStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// A host's request to convert earned coins into a payout.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoutRequest {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub host_id: ObjectId,
    pub coin: i64,
    /// Requested amount in platform currency units.
    pub amount: f64,
    pub status: PayoutStatus,
    #[serde(default)]
    pub reviewed_by: Option<ObjectId>,
    pub created_at: DateTime<Utc>,
}

impl Identified for PayoutRequest {
    fn ident(&self) -> &str {
        self.id.as_str()
    }
}
