//! Game outcome and the messages shown for it

use crate::core::Word;

/// Maximum number of guesses per game
pub const MAX_TRIES: usize = 6;

/// Praise for winning, indexed by attempts used minus one
const PRAISES: [&str; MAX_TRIES] = [
    "Genius",
    "Magnificent",
    "Impressive",
    "Splendid",
    "Great",
    "Phew",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Solved using this many attempts
    Won(usize),
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Dialog title for a finished game
    #[must_use]
    pub fn headline(self) -> Option<String> {
        match self {
            Self::InProgress => None,
            Self::Won(attempts) => {
                let praise = PRAISES[attempts.clamp(1, MAX_TRIES) - 1];
                Some(format!("{praise}!"))
            }
            Self::Lost => Some("Better Luck Next Time!".to_string()),
        }
    }

    /// Dialog body for a finished game; a loss reveals the answer
    #[must_use]
    pub fn prompt(self, answer: &Word) -> Option<String> {
        match self {
            Self::InProgress => None,
            Self::Won(_) => Some("Wanna Play Another Game?".to_string()),
            Self::Lost => Some(format!("One More Game?\n(BTW the word was {answer})")),
        }
    }
}
