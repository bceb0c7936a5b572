use crate::domain::payout::{PayoutRequest, PayoutStatus};
use crate::domain::types::DateRange;
use crate::repository::{Pagination, PayoutListQuery, PayoutReader};
use crate::services::ServiceResult;

/// Fetches one page of payout requests, optionally narrowed by status.
pub async fn list_payouts<R>(
    repo: &R,
    status: Option<PayoutStatus>,
    date_range: DateRange,
    pagination: Pagination,
) -> ServiceResult<(usize, Vec<PayoutRequest>)>
where
    R: PayoutReader + ?Sized,
{
    let mut query = PayoutListQuery::new()
        .date_range(date_range)
        .paginate(pagination.page, pagination.per_page);
    if let Some(status) = status {
        query = query.status(status);
    }
    Ok(repo.list_payouts(query).await?)
}
