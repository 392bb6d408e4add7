//! A Higher-Lower card game engine with optional `no_std` support.
//!
//! The crate provides a [`StandardDeck`] implementing the [`CardDeck`]
//! capabilities and a [`HigherLowerGame`] that deals from a filtered,
//! shuffled copy of it while tracking the player's streak of correct guesses.
//!
//! # Example
//!
//! ```
//! use hilo::{GameOptions, Guess, HigherLowerGame, Rank};
//!
//! let options = GameOptions::new(3).with_minimum_rank(Rank::Five);
//! let mut game = HigherLowerGame::with_seed(options, 42).unwrap();
//! let result = game.make_guess(Guess::Higher).unwrap();
//! assert_eq!(game.previous_card(), Some(result.previous));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod rng;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{CardDeck, StandardDeck};
pub use error::{DeckError, GameError};
pub use game::{GameState, Guess, HigherLowerGame};
pub use options::{GameOptions, MOTIVATION_THRESHOLD};
pub use result::GuessResult;
pub use rng::SharedRng;
