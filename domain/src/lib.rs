//! Domain layer for movie-quiz
//!
//! This crate contains the core entities and value objects of the quiz.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Movie**: an entry of the remote catalog (id + rating)
//! - **Catalog**: the rating-filtered set of movies questions are drawn from
//! - **Question**: a yes/no question derived from a movie's rating and poster
//! - **QuizRound**: the score of one round of answered questions

pub mod core;
pub mod movie;
pub mod quiz;

// Re-export commonly used types
pub use core::error::DomainError;
pub use movie::{catalog::Catalog, entities::Movie};
pub use quiz::{
    question::{QUESTION_PROMPT, Question, RATING_THRESHOLD},
    round::{AnswerOutcome, QuizRound},
};
