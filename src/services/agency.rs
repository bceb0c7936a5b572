use crate::domain::agency::CommissionRecord;
use crate::domain::types::{DateRange, ObjectId};
use crate::repository::{CommissionListQuery, CommissionReader, Pagination};
use crate::services::ServiceResult;

/// Fetches one page of an agency's commission history.
pub async fn list_commissions<R>(
    repo: &R,
    agency_id: &ObjectId,
    date_range: DateRange,
    pagination: Pagination,
) -> ServiceResult<(usize, Vec<CommissionRecord>)>
where
    R: CommissionReader + ?Sized,
{
    let query = CommissionListQuery::new(agency_id.clone())
        .date_range(date_range)
        .paginate(pagination.page, pagination.per_page);
    Ok(repo.list_commissions(query).await?)
}
