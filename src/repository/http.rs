//! `reqwest`-backed implementation of the reader traits.
//!
//! Every list endpoint shares one envelope shape:
//! `{status: bool, message?, total, <payload key>: [...]}` where the key
//! holding the array differs per endpoint (`data`, `history`, per-tab
//! keys for the relation lists). Decoding goes through [`parse_page`] so
//! the quirks are handled once.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::agency::CommissionRecord;
use crate::domain::ledger::LedgerEntry;
use crate::domain::payout::PayoutRequest;
use crate::domain::post::Post;
use crate::domain::relation::RelatedUser;
use crate::domain::user::User;
use crate::domain::video::Video;
use crate::models::config::ConsoleConfig;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CommissionListQuery, CommissionReader, LedgerListQuery, LedgerReader, Pagination,
    PayoutListQuery, PayoutReader, PostListQuery, PostReader, RelationListQuery, RelationReader,
    UserListQuery, UserReader, VideoListQuery, VideoReader,
};

#[derive(Clone)]
pub struct HttpRepository {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpRepository {
    pub fn new(config: &ConsoleConfig) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        })
    }

    /// Requests one page and decodes the platform envelope.
    async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Vec<(&'static str, String)>,
        payload_key: &str,
    ) -> RepositoryResult<(usize, Vec<T>)> {
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("GET {url} {params:?}");

        let mut request = self.client.get(&url).query(&params);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RepositoryError::Transport(format!(
                "{url} returned HTTP {status}"
            )));
        }

        parse_page(&body, payload_key)
    }
}

/// Decodes a list envelope, extracting the array under `payload_key`.
///
/// `status: false` is a domain rejection even on HTTP 200. A missing or
/// `null` payload key decodes as an empty page, and a missing `total`
/// falls back to the decoded item count, so a lenient endpoint degrades
/// to a single terminating page instead of an error.
pub(crate) fn parse_page<T: DeserializeOwned>(
    body: &str,
    payload_key: &str,
) -> RepositoryResult<(usize, Vec<T>)> {
    let envelope: Value = serde_json::from_str(body)?;

    let ok = envelope
        .get("status")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !ok {
        let message = envelope
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("request rejected by server")
            .to_string();
        return Err(RepositoryError::Rejected(message));
    }

    let items: Vec<T> = match envelope.get(payload_key) {
        None | Some(Value::Null) => Vec::new(),
        Some(value @ Value::Array(_)) => serde_json::from_value(value.clone())?,
        Some(other) => {
            return Err(RepositoryError::Malformed(format!(
                "expected an array under `{payload_key}`, got {other}"
            )));
        }
    };

    let total = envelope
        .get("total")
        .and_then(Value::as_u64)
        .map(|t| t as usize)
        .unwrap_or(items.len());

    Ok((total, items))
}

fn push_pagination(params: &mut Vec<(&'static str, String)>, pagination: Option<Pagination>) {
    if let Some(p) = pagination {
        params.push(("page", p.page.to_string()));
        params.push(("limit", p.per_page.to_string()));
    }
}

impl UserReader for HttpRepository {
    async fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)> {
        let mut params = vec![
            ("startDate", query.date_range.start_param()),
            ("endDate", query.date_range.end_param()),
        ];
        if let Some(search) = query.search {
            params.push(("search", search));
        }
        if let Some(status) = query.status {
            params.push(("status", status.as_param().to_string()));
        }
        push_pagination(&mut params, query.pagination);
        self.fetch_page("admin/user", params, "data").await
    }
}

impl PostReader for HttpRepository {
    async fn list_posts(&self, query: PostListQuery) -> RepositoryResult<(usize, Vec<Post>)> {
        let mut params = vec![
            ("startDate", query.date_range.start_param()),
            ("endDate", query.date_range.end_param()),
        ];
        if let Some(user_id) = query.user_id {
            params.push(("userId", user_id.to_string()));
        }
        if let Some(search) = query.search {
            params.push(("search", search));
        }
        push_pagination(&mut params, query.pagination);
        self.fetch_page("admin/post", params, "data").await
    }
}

impl VideoReader for HttpRepository {
    async fn list_videos(&self, query: VideoListQuery) -> RepositoryResult<(usize, Vec<Video>)> {
        let mut params = vec![
            ("startDate", query.date_range.start_param()),
            ("endDate", query.date_range.end_param()),
        ];
        if let Some(user_id) = query.user_id {
            params.push(("userId", user_id.to_string()));
        }
        if let Some(search) = query.search {
            params.push(("search", search));
        }
        push_pagination(&mut params, query.pagination);
        self.fetch_page("admin/video", params, "data").await
    }
}

impl LedgerReader for HttpRepository {
    async fn list_trades(
        &self,
        query: LedgerListQuery,
    ) -> RepositoryResult<(usize, Vec<LedgerEntry>)> {
        let mut params = vec![
            ("traderId", query.trader_id.to_string()),
            ("startDate", query.date_range.start_param()),
            ("endDate", query.date_range.end_param()),
        ];
        if let Some(kind) = query.kind {
            params.push(("type", kind.as_param().to_string()));
        }
        push_pagination(&mut params, query.pagination);
        self.fetch_page("admin/coinTrader/history", params, "history")
            .await
    }
}

impl CommissionReader for HttpRepository {
    async fn list_commissions(
        &self,
        query: CommissionListQuery,
    ) -> RepositoryResult<(usize, Vec<CommissionRecord>)> {
        let mut params = vec![
            ("agencyId", query.agency_id.to_string()),
            ("startDate", query.date_range.start_param()),
            ("endDate", query.date_range.end_param()),
        ];
        push_pagination(&mut params, query.pagination);
        self.fetch_page("admin/agency/commission", params, "history")
            .await
    }
}

impl RelationReader for HttpRepository {
    async fn list_relations(
        &self,
        query: RelationListQuery,
    ) -> RepositoryResult<(usize, Vec<RelatedUser>)> {
        let mut params = vec![
            ("userId", query.user_id.to_string()),
            ("type", query.kind.as_param().to_string()),
        ];
        push_pagination(&mut params, query.pagination);
        self.fetch_page("admin/user/relations", params, query.kind.payload_key())
            .await
    }
}

impl PayoutReader for HttpRepository {
    async fn list_payouts(
        &self,
        query: PayoutListQuery,
    ) -> RepositoryResult<(usize, Vec<PayoutRequest>)> {
        let mut params = vec![
            ("startDate", query.date_range.start_param()),
            ("endDate", query.date_range.end_param()),
        ];
        if let Some(status) = query.status {
            params.push(("status", status.as_param().to_string()));
        }
        push_pagination(&mut params, query.pagination);
        self.fetch_page("admin/payout", params, "data").await
    }
}
