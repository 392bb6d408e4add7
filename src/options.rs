//! Game configuration options.

use crate::card::Rank;

/// Remaining correct guesses at or below which a motivation hint is shown.
pub const MOTIVATION_THRESHOLD: u32 = 3;

/// Configuration options for a Higher-Lower game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hilo::{GameOptions, Rank};
///
/// let options = GameOptions::default()
///     .with_required_correct_guesses(5)
///     .with_minimum_rank(Rank::Five);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Consecutive correct guesses needed to win. Must be at least 1.
    pub required_correct_guesses: u32,
    /// Cards ranked below this are removed before the game starts.
    pub minimum_rank: Rank,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            required_correct_guesses: 3,
            minimum_rank: Rank::Ace,
        }
    }
}

impl GameOptions {
    /// Creates options requiring the given streak, keeping every rank.
    #[must_use]
    pub const fn new(required_correct_guesses: u32) -> Self {
        Self {
            required_correct_guesses,
            minimum_rank: Rank::Ace,
        }
    }

    /// Sets the number of consecutive correct guesses needed to win.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::GameOptions;
    ///
    /// let options = GameOptions::default().with_required_correct_guesses(7);
    /// assert_eq!(options.required_correct_guesses, 7);
    /// ```
    #[must_use]
    pub const fn with_required_correct_guesses(mut self, required: u32) -> Self {
        self.required_correct_guesses = required;
        self
    }

    /// Sets the lowest rank kept in the working deck.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::{GameOptions, Rank};
    ///
    /// let options = GameOptions::default().with_minimum_rank(Rank::Five);
    /// assert_eq!(options.minimum_rank, Rank::Five);
    /// ```
    #[must_use]
    pub const fn with_minimum_rank(mut self, minimum_rank: Rank) -> Self {
        self.minimum_rank = minimum_rank;
        self
    }
}
