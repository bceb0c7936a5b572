//! Abstractions over the platform REST API.
//!
//! Each console resource gets a query builder and a reader trait; list
//! calls return `(total, items)` where `total` is the server-reported
//! count for the current filter. The concrete backend lives in
//! [`http`]; tests substitute mocks or scripted sources.

use crate::domain::agency::CommissionRecord;
use crate::domain::ledger::{LedgerEntry, TradeKind};
use crate::domain::payout::{PayoutRequest, PayoutStatus};
use crate::domain::post::Post;
use crate::domain::relation::{RelatedUser, RelationKind};
use crate::domain::types::{DateRange, ObjectId};
use crate::domain::user::{User, UserStatus};
use crate::domain::video::Video;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    pub search: Option<String>,
    pub status: Option<UserStatus>,
    pub date_range: DateRange,
    pub pagination: Option<Pagination>,
}

impl UserListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn status(mut self, status: UserStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostListQuery {
    pub user_id: Option<ObjectId>,
    pub search: Option<String>,
    pub date_range: DateRange,
    pub pagination: Option<Pagination>,
}

impl PostListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(mut self, user_id: ObjectId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct VideoListQuery {
    pub user_id: Option<ObjectId>,
    pub search: Option<String>,
    pub date_range: DateRange,
    pub pagination: Option<Pagination>,
}

impl VideoListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(mut self, user_id: ObjectId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Coin-trader history is always scoped to one trader.
#[derive(Debug, Clone)]
pub struct LedgerListQuery {
    pub trader_id: ObjectId,
    pub kind: Option<TradeKind>,
    pub date_range: DateRange,
    pub pagination: Option<Pagination>,
}

impl LedgerListQuery {
    pub fn new(trader_id: ObjectId) -> Self {
        Self {
            trader_id,
            kind: None,
            date_range: DateRange::All,
            pagination: None,
        }
    }

    pub fn kind(mut self, kind: TradeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Commission history is always scoped to one agency.
#[derive(Debug, Clone)]
pub struct CommissionListQuery {
    pub agency_id: ObjectId,
    pub date_range: DateRange,
    pub pagination: Option<Pagination>,
}

impl CommissionListQuery {
    pub fn new(agency_id: ObjectId) -> Self {
        Self {
            agency_id,
            date_range: DateRange::All,
            pagination: None,
        }
    }

    pub fn date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Relation tabs are scoped to one profile and one tab kind.
#[derive(Debug, Clone)]
pub struct RelationListQuery {
    pub user_id: ObjectId,
    pub kind: RelationKind,
    pub pagination: Option<Pagination>,
}

impl RelationListQuery {
    pub fn new(user_id: ObjectId, kind: RelationKind) -> Self {
        Self {
            user_id,
            kind,
            pagination: None,
        }
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct PayoutListQuery {
    pub status: Option<PayoutStatus>,
    pub date_range: DateRange,
    pub pagination: Option<Pagination>,
}

impl PayoutListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: PayoutStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[allow(async_fn_in_trait)]
pub trait UserReader {
    async fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
}

#[allow(async_fn_in_trait)]
pub trait PostReader {
    async fn list_posts(&self, query: PostListQuery) -> RepositoryResult<(usize, Vec<Post>)>;
}

#[allow(async_fn_in_trait)]
pub trait VideoReader {
    async fn list_videos(&self, query: VideoListQuery) -> RepositoryResult<(usize, Vec<Video>)>;
}

#[allow(async_fn_in_trait)]
pub trait LedgerReader {
    async fn list_trades(
        &self,
        query: LedgerListQuery,
    ) -> RepositoryResult<(usize, Vec<LedgerEntry>)>;
}

#[allow(async_fn_in_trait)]
pub trait CommissionReader {
    async fn list_commissions(
        &self,
        query: CommissionListQuery,
    ) -> RepositoryResult<(usize, Vec<CommissionRecord>)>;
}

#[allow(async_fn_in_trait)]
pub trait RelationReader {
    async fn list_relations(
        &self,
        query: RelationListQuery,
    ) -> RepositoryResult<(usize, Vec<RelatedUser>)>;
}

#[allow(async_fn_in_trait)]
pub trait PayoutReader {
    async fn list_payouts(
        &self,
        query: PayoutListQuery,
    ) -> RepositoryResult<(usize, Vec<PayoutRequest>)>;
}
