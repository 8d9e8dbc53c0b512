//! Error types for chess-insights-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {status}")]
    Api { status: reqwest::StatusCode },

    #[error("player not found: {0}")]
    UserNotFound(String),

    #[error("upstream refused the request: {0}")]
    FetchFailed(String),

    #[error("fetch failed after {attempts} attempts")]
    MaxRetriesExceeded { attempts: usize },

    #[error("stats unavailable for {username}")]
    StatsUnavailable {
        username: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl Error {
    /// Whether the retry loop may try again after this failure. Unknown
    /// players and permanent redirects are terminal; everything coming out of
    /// the transport or body decoding is worth another attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Json(_) | Error::Api { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
