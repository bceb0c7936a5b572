//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::agency::CommissionRecord;
use crate::domain::ledger::LedgerEntry;
use crate::domain::payout::PayoutRequest;
use crate::domain::post::Post;
use crate::domain::relation::RelatedUser;
use crate::domain::user::User;
use crate::domain::video::Video;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CommissionListQuery, CommissionReader, LedgerListQuery, LedgerReader, PayoutListQuery,
    PayoutReader, PostListQuery, PostReader, RelationListQuery, RelationReader, UserListQuery,
    UserReader, VideoListQuery, VideoReader,
};

mock! {
    pub Gateway {}

    impl UserReader for Gateway {
        async fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
    }

    impl PostReader for Gateway {
        async fn list_posts(&self, query: PostListQuery) -> RepositoryResult<(usize, Vec<Post>)>;
    }

    impl VideoReader for Gateway {
        async fn list_videos(&self, query: VideoListQuery) -> RepositoryResult<(usize, Vec<Video>)>;
    }

    impl LedgerReader for Gateway {
        async fn list_trades(
            &self,
            query: LedgerListQuery,
        ) -> RepositoryResult<(usize, Vec<LedgerEntry>)>;
    }

    impl CommissionReader for Gateway {
        async fn list_commissions(
            &self,
            query: CommissionListQuery,
        ) -> RepositoryResult<(usize, Vec<CommissionRecord>)>;
    }

    impl RelationReader for Gateway {
        async fn list_relations(
            &self,
            query: RelationListQuery,
        ) -> RepositoryResult<(usize, Vec<RelatedUser>)>;
    }

    impl PayoutReader for Gateway {
        async fn list_payouts(
            &self,
            query: PayoutListQuery,
        ) -> RepositoryResult<(usize, Vec<PayoutRequest>)>;
    }
}
