//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod api;
mod quiz;

pub use api::FileApiConfig;
pub use quiz::FileQuizConfig;

use serde::{Deserialize, Serialize};

/// How serious a configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A problem detected in the loaded configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub message: String,
}

impl ConfigIssue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote movie service settings
    pub api: FileApiConfig,
    /// Quiz round settings
    pub quiz: FileQuizConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.api.movies_url.trim().is_empty() {
            issues.push(ConfigIssue::error("api.movies_url must not be empty"));
        }

        if self.api.poster_url.trim().is_empty() {
            issues.push(ConfigIssue::error("api.poster_url must not be empty"));
        } else if !self.api.poster_url.contains(FileApiConfig::ID_PLACEHOLDER) {
            issues.push(ConfigIssue::warning(format!(
                "api.poster_url has no {} placeholder; every question will use the same poster",
                FileApiConfig::ID_PLACEHOLDER
            )));
        }

        if self.api.timeout_seconds == 0 {
            issues.push(ConfigIssue::warning(
                "api.timeout_seconds is 0; requests will not time out",
            ));
        }

        if self.quiz.rounds == 0 {
            issues.push(ConfigIssue::error("quiz.rounds must be at least 1"));
        }

        issues
    }
}
