//! Quiz subdomain: questions and round scoring.

pub mod question;
pub mod round;
