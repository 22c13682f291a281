use thiserror::Error;

/// Failures talking to a backend.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),

    /// The backend refused the request (4xx other than 404/409).
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The backend failed while handling the request (5xx).
    #[error("backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl RepositoryError {
    /// Map a non-success status and the backend's message to an error.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            404 => Self::NotFound,
            409 => Self::Conflict(message),
            400..=499 => Self::Rejected { status, message },
            _ => Self::Backend { status, message },
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
