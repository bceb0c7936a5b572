//! Service functions bridging the repository traits to the console.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod agency;
pub mod content;
pub mod feed;
pub mod ledger;
pub mod payouts;
pub mod relations;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("validation error: {0}")]
    Validation(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Trims a search term, dropping it entirely when only whitespace remains.
pub(crate) fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
