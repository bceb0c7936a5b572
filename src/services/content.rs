//! Post and video moderation lists.

use crate::domain::post::Post;
use crate::domain::types::{DateRange, ObjectId};
use crate::domain::video::Video;
use crate::repository::{Pagination, PostListQuery, PostReader, VideoListQuery, VideoReader};
use crate::services::{ServiceResult, normalize_search};

/// Filter context shared by the post and video screens.
#[derive(Clone, Debug, Default)]
pub struct ContentListParams {
    /// Restrict to one author (drill-down from a user profile).
    pub user_id: Option<ObjectId>,
    pub search: Option<String>,
    pub date_range: DateRange,
}

pub async fn list_posts<R>(
    repo: &R,
    params: &ContentListParams,
    pagination: Pagination,
) -> ServiceResult<(usize, Vec<Post>)>
where
    R: PostReader + ?Sized,
{
    let mut query = PostListQuery::new()
        .date_range(params.date_range)
        .paginate(pagination.page, pagination.per_page);
    if let Some(user_id) = &params.user_id {
        query = query.user(user_id.clone());
    }
    if let Some(search) = normalize_search(params.search.as_deref()) {
        query = query.search(search);
    }
    Ok(repo.list_posts(query).await?)
}

pub async fn list_videos<R>(
    repo: &R,
    params: &ContentListParams,
    pagination: Pagination,
) -> ServiceResult<(usize, Vec<Video>)>
where
    R: VideoReader + ?Sized,
{
    let mut query = VideoListQuery::new()
        .date_range(params.date_range)
        .paginate(pagination.page, pagination.per_page);
    if let Some(user_id) = &params.user_id {
        query = query.user(user_id.clone());
    }
    if let Some(search) = normalize_search(params.search.as_deref()) {
        query = query.search(search);
    }
    Ok(repo.list_videos(query).await?)
}
