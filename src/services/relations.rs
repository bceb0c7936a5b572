use crate::domain::relation::{RelatedUser, RelationKind};
use crate::domain::types::ObjectId;
use crate::repository::{Pagination, RelationListQuery, RelationReader};
use crate::services::ServiceResult;

/// Fetches one page of a profile's follower/following/blocked/visitor tab.
pub async fn list_relations<R>(
    repo: &R,
    user_id: &ObjectId,
    kind: RelationKind,
    pagination: Pagination,
) -> ServiceResult<(usize, Vec<RelatedUser>)>
where
    R: RelationReader + ?Sized,
{
    let query = RelationListQuery::new(user_id.clone(), kind)
        .paginate(pagination.page, pagination.per_page);
    Ok(repo.list_relations(query).await?)
}
