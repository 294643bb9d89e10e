//! Player input parsing

/// A command typed by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    Yes,
    No,
    Retry,
    Quit,
}

impl PlayerInput {
    /// Parse a line of input (case-insensitive, surrounding whitespace ignored)
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => Some(PlayerInput::Yes),
            "n" | "no" => Some(PlayerInput::No),
            "r" | "retry" => Some(PlayerInput::Retry),
            "q" | "quit" | "exit" => Some(PlayerInput::Quit),
            _ => None,
        }
    }
}
