//! The modal-tab lists attached to a user profile.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ObjectId, TypeConstraintError};
use crate::pagination::Identified;

/// Which profile tab a relation list belongs to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Followers,
    Following,
    Blocked,
    Visitors,
}

impl RelationKind {
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Followers => "followers",
            Self::Following => "following",
            Self::Blocked => "blocked",
            Self::Visitors => "visitors",
        }
    }

    /// Envelope key the platform uses for this tab's payload.
    pub fn payload_key(&self) -> &'static str {
        match self {
            Self::Followers => "followers",
            Self::Following => "following",
            Self::Blocked => "blocked",
            Self::Visitors => "visitors",
        }
    }
}

impl FromStr for RelationKind {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "followers" => Ok(Self::Followers),
            "following" => Ok(Self::Following),
            "blocked" => Ok(Self::Blocked),
            "visitors" => Ok(Self::Visitors),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// Entry in a follower/following/blocked/visitor tab.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelatedUser {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// When the relation was established (or the visit happened).
    #[serde(default)]
    pub related_at: Option<DateTime<Utc>>,
}

impl Identified for RelatedUser {
    fn ident(&self) -> &str {
        self.id.as_str()
    }
}
