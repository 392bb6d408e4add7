//! Guess result types.

use crate::card::Card;
use crate::game::{GameState, Guess};

/// Result of a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessResult {
    /// The direction that was guessed.
    pub guess: Guess,
    /// The card the guess was made against.
    pub previous: Card,
    /// The card dealt in response to the guess.
    pub dealt: Card,
    /// Whether the guess was correct.
    pub correct: bool,
    /// The streak of correct guesses after this guess.
    pub correct_guesses: u32,
    /// The game state after this guess.
    pub state: GameState,
}
