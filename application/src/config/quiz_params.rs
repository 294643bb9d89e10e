//! Quiz parameters — round control.
//!
//! [`QuizParams`] groups the static parameters of one quiz session: how many
//! questions make a round and whether question selection is reproducible.

/// Quiz round control parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizParams {
    /// Number of questions answered per round.
    pub rounds: usize,
    /// Seed for movie selection. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for QuizParams {
    fn default() -> Self {
        Self {
            rounds: 10,
            seed: None,
        }
    }
}

impl QuizParams {
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
