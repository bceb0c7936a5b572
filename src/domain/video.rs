use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::ObjectId;
use crate::pagination::Identified;

/// Short video surfaced in the content-moderation screens.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    #[serde(default)]
    pub caption: Option<String>,
    pub video_url: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    pub created_at: DateTime<Utc>,
}

impl Identified for Video {
    fn ident(&self) -> &str {
        self.id.as_str()
    }
}
