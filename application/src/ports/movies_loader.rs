//! Movies loader port
//!
//! Defines the interface for fetching the movie catalog from a remote source.

use async_trait::async_trait;
use quiz_domain::Movie;
use thiserror::Error;

/// Errors that can occur while talking to the remote movie service
///
/// Shared by both loader ports. The message is surfaced to the player
/// unchanged, so variants carry readable text rather than source errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status} {reason}")]
    Http { status: u16, reason: String },

    /// The service answered but reported an error of its own
    #[error("{0}")]
    Api(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request timeout")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

/// Loader for the full movie catalog
///
/// Each call performs an independent single-attempt fetch; retries are not
/// the loader's business. The returned list is unfiltered.
#[async_trait]
pub trait MoviesLoader: Send + Sync {
    /// Fetch every movie the service currently knows about
    async fn load_movies(&self) -> Result<Vec<Movie>, LoaderError>;
}
