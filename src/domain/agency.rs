//! Agency commission records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::ObjectId;
use crate::pagination::Identified;

/// Commission earned by an agency for one host over one settlement period.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub agency_id: ObjectId,
    #[serde(default)]
    pub host_id: Option<ObjectId>,
    /// Coins the host earned during the period.
    #[serde(default)]
    pub coin_earned: i64,
    /// Commission credited to the agency, in platform currency units.
    #[serde(default)]
    pub amount: f64,
    /// Settlement period label, e.g. `"2025-03"`.
    #[serde(default)]
    pub period: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Identified for CommissionRecord {
    fn ident(&self) -> &str {
        self.id.as_str()
    }
}
