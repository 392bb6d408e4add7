//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// The player has not yet reached the required streak.
    #[default]
    InProgress,
    /// The required streak was reached. Once won, the game stays won.
    Won,
}

/// A guess about the next card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guess {
    /// The next card ranks the same or higher.
    Higher,
    /// The next card ranks the same or lower.
    Lower,
}

impl From<bool> for Guess {
    /// Maps `true` to [`Guess::Higher`] and `false` to [`Guess::Lower`].
    fn from(higher: bool) -> Self {
        if higher { Self::Higher } else { Self::Lower }
    }
}
