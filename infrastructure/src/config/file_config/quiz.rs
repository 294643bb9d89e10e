//! Quiz configuration from TOML (`[quiz]` section)

use quiz_application::QuizParams;
use serde::{Deserialize, Serialize};

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Questions per round
    pub rounds: usize,
    /// Fixed seed for movie selection
    pub seed: Option<u64>,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            seed: None,
        }
    }
}

impl FileQuizConfig {
    pub fn to_params(&self) -> QuizParams {
        QuizParams::default()
            .with_rounds(self.rounds)
            .with_seed(self.seed)
    }
}
