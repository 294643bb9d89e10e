//! Application-level configuration.
//!
//! - [`QuizParams`] — quiz round control (length, random seed)

pub mod quiz_params;

pub use quiz_params::QuizParams;
