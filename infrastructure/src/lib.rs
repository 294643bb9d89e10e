//! Infrastructure layer for movie-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod imdb;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileApiConfig, FileConfig, FileQuizConfig, Severity};
pub use imdb::{HttpMoviesLoader, HttpPostersLoader, http_client};
