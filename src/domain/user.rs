use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::ObjectId;
use crate::pagination::Identified;

/// Platform account as listed in the console's user screens.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Current coin balance, maintained server-side.
    #[serde(default)]
    pub coin: i64,
    #[serde(default)]
    pub is_block: bool,
    pub created_at: DateTime<Utc>,
}

impl Identified for User {
    fn ident(&self) -> &str {
        self.id.as_str()
    }
}

/// Moderation status filter for the user list.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Blocked,
}

impl UserStatus {
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Blocked => "blocked",
        }
    }
}
