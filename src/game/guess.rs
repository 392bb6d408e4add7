use alloc::format;
use alloc::string::String;

use crate::card::Card;
use crate::deck::CardDeck;
use crate::error::GameError;
use crate::options::MOTIVATION_THRESHOLD;
use crate::result::GuessResult;

use super::{GameState, Guess, HigherLowerGame};

/// Returns whether `guess` holds for `dealt` following `current`.
///
/// Equal ranks satisfy either guess.
fn is_correct(guess: Guess, current: Card, dealt: Card) -> bool {
    match guess {
        Guess::Higher => dealt.rank() >= current.rank(),
        Guess::Lower => dealt.rank() <= current.rank(),
    }
}

fn motivation_for(remaining: u32) -> Option<String> {
    match remaining {
        0 => None,
        1 => Some(String::from("Only 1 more correct guess needed!")),
        n if n <= MOTIVATION_THRESHOLD => Some(format!("Only {n} more correct guesses needed!")),
        _ => None,
    }
}

impl<D: CardDeck> HigherLowerGame<D> {
    /// Deals the next card and scores the guess against the current card.
    ///
    /// A correct guess extends the streak and wins the game once the streak
    /// reaches the required count. A wrong guess resets the streak and clears
    /// the motivation. Every call deals exactly one card.
    ///
    /// Guesses are still accepted after the game is won; the game stays won.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Deck`] if the working deck is exhausted. The game
    /// state is left unchanged in that case.
    pub fn make_guess(&mut self, guess: impl Into<Guess>) -> Result<GuessResult, GameError> {
        let guess = guess.into();
        let dealt = self.deck.deal_card()?;
        let previous = self.current_card;
        let correct = is_correct(guess, previous, dealt);

        self.previous_card = Some(previous);
        self.current_card = dealt;

        if correct {
            self.correct_guesses = self.correct_guesses.saturating_add(1);

            if self.state == GameState::Won {
                self.motivation = None;
            } else if self.correct_guesses >= self.options.required_correct_guesses {
                self.state = GameState::Won;
                self.motivation = None;
                log::debug!("game won after {} correct guesses", self.correct_guesses);
            } else {
                self.motivation =
                    motivation_for(self.options.required_correct_guesses - self.correct_guesses);
            }
        } else {
            self.correct_guesses = 0;
            self.motivation = None;
        }

        log::trace!(
            "guessed {guess:?} on {previous}, dealt {dealt}: {} (streak {})",
            if correct { "correct" } else { "wrong" },
            self.correct_guesses
        );

        Ok(GuessResult {
            guess,
            previous,
            dealt,
            correct,
            correct_guesses: self.correct_guesses,
            state: self.state,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::card::{Rank, Suit};

    use super::*;

    const fn card(rank: Rank) -> Card {
        Card::new(Suit::Clubs, rank)
    }

    #[test]
    fn ties_favor_either_guess() {
        assert!(is_correct(Guess::Higher, card(Rank::Seven), card(Rank::Seven)));
        assert!(is_correct(Guess::Lower, card(Rank::Seven), card(Rank::Seven)));
    }

    #[test]
    fn direction_matters_for_different_ranks() {
        assert!(is_correct(Guess::Higher, card(Rank::Five), card(Rank::King)));
        assert!(!is_correct(Guess::Lower, card(Rank::Five), card(Rank::King)));
        assert!(is_correct(Guess::Lower, card(Rank::Jack), card(Rank::Ten)));
        assert!(!is_correct(Guess::Higher, card(Rank::Jack), card(Rank::Ten)));
    }

    #[test]
    fn motivation_only_near_the_goal() {
        assert_eq!(motivation_for(4), None);
        assert_eq!(motivation_for(0), None);
        assert!(motivation_for(3).is_some_and(|m| m.contains('3')));
        assert!(motivation_for(2).is_some_and(|m| m.contains('2')));
        assert_eq!(
            motivation_for(1).as_deref(),
            Some("Only 1 more correct guess needed!")
        );
    }
}
