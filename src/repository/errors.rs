use thiserror::Error;

/// Failure taxonomy for calls against the platform API.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Request never reached the server or the response never arrived.
    #[error("transport error: {0}")]
    Transport(String),

    /// Server answered but flagged the call as failed (`status: false`).
    #[error("{0}")]
    Rejected(String),

    /// Response arrived but could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Client-side setup problem (bad base URL, unbuildable client).
    #[error("configuration error: {0}")]
    Configuration(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RepositoryError::Transport(format!("request timed out: {err}"))
        } else if err.is_builder() {
            RepositoryError::Configuration(err.to_string())
        } else {
            RepositoryError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Malformed(err.to_string())
    }
}
