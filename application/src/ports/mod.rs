//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters and the
//! presentation layer must implement.

pub mod movies_loader;
pub mod posters_loader;
pub mod question_listener;
