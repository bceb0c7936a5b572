//! Coin-trader ledger records.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ObjectId, TypeConstraintError};
use crate::pagination::Identified;

/// Direction of a coin trade from the trader's perspective.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TradeKind {
    Purchase,
    Sell,
}

impl TradeKind {
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Sell => "sell",
        }
    }
}

impl FromStr for TradeKind {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "purchase" => Ok(Self::Purchase),
            "sell" => Ok(Self::Sell),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// One entry in a coin trader's history drawer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub trader_id: ObjectId,
    /// Signed coin delta applied to the trader's balance.
    pub coin: i64,
    /// Settlement amount in platform currency units.
    #[serde(default)]
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: TradeKind,
    /// Counterparty account, absent for platform top-ups.
    #[serde(default)]
    pub user_id: Option<ObjectId>,
    pub created_at: DateTime<Utc>,
}

impl Identified for LedgerEntry {
    fn ident(&self) -> &str {
        self.id.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_kind_parses_case_insensitively() {
        assert_eq!("Purchase".parse::<TradeKind>(), Ok(TradeKind::Purchase));
        assert_eq!(" sell ".parse::<TradeKind>(), Ok(TradeKind::Sell));
        assert!("refund".parse::<TradeKind>().is_err());
    }
}
