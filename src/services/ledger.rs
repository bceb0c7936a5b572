use crate::domain::ledger::{LedgerEntry, TradeKind};
use crate::domain::types::{DateRange, ObjectId};
use crate::repository::{LedgerListQuery, LedgerReader, Pagination};
use crate::services::ServiceResult;

/// Filter context for a coin trader's history drawer.
#[derive(Clone, Debug)]
pub struct LedgerListParams {
    pub trader_id: ObjectId,
    pub kind: Option<TradeKind>,
    pub date_range: DateRange,
}

impl LedgerListParams {
    pub fn new(trader_id: ObjectId) -> Self {
        Self {
            trader_id,
            kind: None,
            date_range: DateRange::All,
        }
    }
}

/// Fetches one page of a trader's ledger history.
pub async fn list_trades<R>(
    repo: &R,
    params: &LedgerListParams,
    pagination: Pagination,
) -> ServiceResult<(usize, Vec<LedgerEntry>)>
where
    R: LedgerReader + ?Sized,
{
    let mut query = LedgerListQuery::new(params.trader_id.clone())
        .date_range(params.date_range)
        .paginate(pagination.page, pagination.per_page);
    if let Some(kind) = params.kind {
        query = query.kind(kind);
    }
    Ok(repo.list_trades(query).await?)
}
