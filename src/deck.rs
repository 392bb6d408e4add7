//! Deck abstraction and the standard 52-card deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// Capabilities a game needs from a deck of cards.
///
/// The end of the deck is its top: dealing always takes the last card.
pub trait CardDeck {
    /// Returns the number of cards still in the deck.
    fn remaining_cards(&self) -> usize;

    /// Shuffles the remaining cards in place.
    fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R);

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    fn deal_card(&mut self) -> Result<Card, DeckError>;

    /// Returns a new deck holding only the cards ranked `minimum_rank` or
    /// higher, in their current relative order. `self` is left untouched.
    #[must_use]
    fn without_cards_ranking_lower_than(&self, minimum_rank: Rank) -> Self
    where
        Self: Sized;

    /// Returns one new deck per suit, in [`Suit::ALL`] order.
    #[deprecated(note = "split_by_suit will be removed in a future release")]
    #[must_use]
    fn split_by_suit(&self) -> [Self; 4]
    where
        Self: Sized;
}

/// A deck of playing cards backed by its own card storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardDeck {
    cards: Vec<Card>,
}

impl StandardDeck {
    /// Creates an unshuffled 52-card deck, suit by suit from Ace to King.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck containing exactly `cards`, in the given order.
    ///
    /// The last card yielded ends up on top of the deck.
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Returns the cards from the bottom of the deck to the top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for StandardDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Card> for StandardDeck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

impl CardDeck for StandardDeck {
    fn remaining_cards(&self) -> usize {
        self.cards.len()
    }

    fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        log::trace!("shuffled deck of {} cards", self.cards.len());
    }

    fn deal_card(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    fn without_cards_ranking_lower_than(&self, minimum_rank: Rank) -> Self {
        self.cards
            .iter()
            .filter(|card| card.rank() >= minimum_rank)
            .copied()
            .collect()
    }

    fn split_by_suit(&self) -> [Self; 4] {
        Suit::ALL.map(|suit| {
            self.cards
                .iter()
                .filter(|card| card.suit() == suit)
                .copied()
                .collect()
        })
    }
}
