//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No movies found")]
    NoMoviesFound,

    #[error("Quiz round is already complete")]
    RoundComplete,
}
