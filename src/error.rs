//! Error types for deck and game operations.

use thiserror::Error;

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur while setting up or playing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The required number of correct guesses is zero.
    #[error("required number of correct guesses must be at least 1")]
    InvalidRequiredGuesses,
    /// The working deck could not deal a card.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
