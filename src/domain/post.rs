use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::ObjectId;
use crate::pagination::Identified;

/// Image post surfaced in the content-moderation screens.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    pub created_at: DateTime<Utc>,
}

impl Identified for Post {
    fn ident(&self) -> &str {
        self.id.as_str()
    }
}
