//! Interactive console quiz

pub mod console;
pub mod input;
