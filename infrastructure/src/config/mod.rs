//! Configuration file loading for movie-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MOVIE_QUIZ_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./movie-quiz.toml` or `./.movie-quiz.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/movie-quiz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigIssue, FileApiConfig, FileConfig, FileQuizConfig, Severity};
pub use loader::ConfigLoader;
