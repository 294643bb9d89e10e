//! Application layer for movie-quiz
//!
//! This crate contains the question factory use case, port definitions,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QuizParams;
pub use ports::{
    movies_loader::{LoaderError, MoviesLoader},
    posters_loader::PostersLoader,
    question_listener::{QuestionListener, QuizError, QuizEvent, deliver_events},
};
pub use use_cases::question_factory::{QuestionFactory, QuestionFactoryHandle, SlotState};
