//! Higher-Lower game engine and state management.

use alloc::string::String;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank};
use crate::deck::{CardDeck, StandardDeck};
use crate::error::GameError;
use crate::options::GameOptions;

mod guess;
pub mod state;

pub use state::{GameState, Guess};

/// A Higher-Lower game session.
///
/// The game deals from its own working deck: a copy of the deck passed to
/// [`HigherLowerGame::new`] with low-ranked cards removed and the rest
/// shuffled. The player keeps guessing whether the next card ranks higher or
/// lower than the current one until the required streak is reached.
///
/// All state is read-only from the outside; [`HigherLowerGame::make_guess`]
/// is the only way to advance it.
#[derive(Debug, Clone)]
pub struct HigherLowerGame<D = StandardDeck> {
    /// Filtered and shuffled deck the game deals from.
    deck: D,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Card the next guess is compared against.
    current_card: Card,
    /// Card that was current before the last guess.
    previous_card: Option<Card>,
    /// Consecutive correct guesses.
    correct_guesses: u32,
    /// Hint shown when only a few correct guesses are missing.
    motivation: Option<String>,
}

impl<D: CardDeck> HigherLowerGame<D> {
    /// Starts a game dealing from a filtered, shuffled copy of `standard_deck`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidRequiredGuesses`] if the options require
    /// zero correct guesses, or [`GameError::Deck`] if no card ranks at or
    /// above the minimum rank.
    pub fn new<R: Rng + ?Sized>(
        standard_deck: &D,
        options: GameOptions,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if options.required_correct_guesses == 0 {
            return Err(GameError::InvalidRequiredGuesses);
        }

        let mut deck = standard_deck.without_cards_ranking_lower_than(options.minimum_rank);
        deck.shuffle(rng);
        let current_card = deck.deal_card()?;

        log::debug!(
            "higher-lower game started: {} cards ranked {} or higher, {} correct guesses required, first card {}",
            deck.remaining_cards() + 1,
            options.minimum_rank,
            options.required_correct_guesses,
            current_card
        );

        Ok(Self {
            deck,
            options,
            state: GameState::InProgress,
            current_card,
            previous_card: None,
            correct_guesses: 0,
            motivation: None,
        })
    }

    /// Returns the card the next guess is compared against.
    pub const fn current_card(&self) -> Card {
        self.current_card
    }

    /// Returns the card that was current before the last guess.
    ///
    /// Returns `None` until the first guess has been made.
    pub const fn previous_card(&self) -> Option<Card> {
        self.previous_card
    }

    /// Returns the number of consecutive correct guesses.
    pub const fn number_of_correct_guesses(&self) -> u32 {
        self.correct_guesses
    }

    /// Returns the number of consecutive correct guesses needed to win.
    pub const fn required_correct_guesses(&self) -> u32 {
        self.options.required_correct_guesses
    }

    /// Returns the lowest rank in play.
    pub const fn minimum_rank(&self) -> Rank {
        self.options.minimum_rank
    }

    /// Returns the motivation hint, if any.
    pub fn motivation(&self) -> Option<&str> {
        self.motivation.as_deref()
    }

    /// Returns whether the required streak has been reached.
    pub fn has_won(&self) -> bool {
        self.state == GameState::Won
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of cards left in the working deck.
    pub fn remaining_cards(&self) -> usize {
        self.deck.remaining_cards()
    }
}

impl HigherLowerGame<StandardDeck> {
    /// Starts a game on a fresh standard deck shuffled with the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidRequiredGuesses`] if the options require
    /// zero correct guesses.
    ///
    /// # Example
    ///
    /// ```
    /// use hilo::{GameOptions, HigherLowerGame, Rank};
    ///
    /// let options = GameOptions::new(3).with_minimum_rank(Rank::Five);
    /// let game = HigherLowerGame::with_seed(options, 42).unwrap();
    /// assert!(game.current_card().rank() >= Rank::Five);
    /// ```
    pub fn with_seed(options: GameOptions, seed: u64) -> Result<Self, GameError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new(&StandardDeck::new(), options, &mut rng)
    }
}
