//! Presentation layer for movie-quiz
//!
//! This crate contains the CLI definition, console output formatting,
//! and the interactive console quiz that listens to the question factory.

pub mod cli;
pub mod output;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use quiz::console::ConsoleQuiz;
