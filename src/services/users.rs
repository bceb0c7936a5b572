use crate::domain::types::DateRange;
use crate::domain::user::{User, UserStatus};
use crate::repository::{Pagination, UserListQuery, UserReader};
use crate::services::{ServiceResult, normalize_search};

/// Filter context for the user list screen.
#[derive(Clone, Debug, Default)]
pub struct UserListParams {
    pub search: Option<String>,
    pub status: Option<UserStatus>,
    pub date_range: DateRange,
}

/// Fetches one page of the filtered user list.
pub async fn list_users<R>(
    repo: &R,
    params: &UserListParams,
    pagination: Pagination,
) -> ServiceResult<(usize, Vec<User>)>
where
    R: UserReader + ?Sized,
{
    let mut query = UserListQuery::new()
        .date_range(params.date_range)
        .paginate(pagination.page, pagination.per_page);
    if let Some(search) = normalize_search(params.search.as_deref()) {
        query = query.search(search);
    }
    if let Some(status) = params.status {
        query = query.status(status);
    }
    Ok(repo.list_users(query).await?)
}
