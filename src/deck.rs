//! The deck engine: initialization, shuffling and drawing.

use alloc::vec::Vec;

use rand::TryCryptoRng;
use rand::rngs::OsRng;
use tracing::{debug, warn};

use crate::card::{Card, DECK_SIZE, standard_cards};
use crate::error::{DrawError, ShuffleError};
use crate::rng::uniform_index;

/// An ordered collection of cards, drawn from the front.
///
/// A deck starts empty. [`initialize`](Self::initialize) fills it with a
/// standard 52-card set and shuffles it. The deck has no upper size bound;
/// a multi-deck shoe can be built with [`from_cards`](Self::from_cards).
///
/// Mutating operations take `&mut self`. Sharing a deck between threads
/// requires an external lock.
///
/// # Example
///
/// ```
/// use deckrs::Deck;
///
/// let mut deck = Deck::new();
/// deck.initialize()?;
/// let hand = deck.draw(5)?;
/// assert_eq!(hand.len(), 5);
/// assert_eq!(deck.cards_left(), 47);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a deck holding `cards` in the given order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Resets the deck to a full standard set and shuffles it with the
    /// operating system's secure random source.
    ///
    /// # Errors
    ///
    /// Returns [`ShuffleError::RandomnessUnavailable`] if the random source
    /// fails.
    pub fn initialize(&mut self) -> Result<(), ShuffleError> {
        self.initialize_with(&mut OsRng)
    }

    /// Resets the deck to a full standard set and shuffles it with `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ShuffleError::RandomnessUnavailable`] if `rng` fails. The
    /// deck is left unchanged, so an unshuffled set is never dealt.
    pub fn initialize_with<R>(&mut self, rng: &mut R) -> Result<(), ShuffleError>
    where
        R: TryCryptoRng + ?Sized,
    {
        let mut fresh = Vec::with_capacity(DECK_SIZE);
        fresh.extend(standard_cards());

        self.cards = shuffled(fresh, rng)?;
        debug!(cards = self.cards.len(), "deck initialized");
        Ok(())
    }

    /// Shuffles the remaining cards with the operating system's secure
    /// random source.
    ///
    /// # Errors
    ///
    /// Returns [`ShuffleError::RandomnessUnavailable`] if the random source
    /// fails. The deck is left unchanged.
    pub fn shuffle(&mut self) -> Result<(), ShuffleError> {
        self.shuffle_with(&mut OsRng)
    }

    /// Shuffles the remaining cards with `rng`.
    ///
    /// Cards are picked one at a time from the unshuffled pile at a uniform
    /// random index, so every ordering is equally likely.
    ///
    /// # Errors
    ///
    /// Returns [`ShuffleError::RandomnessUnavailable`] if `rng` fails. The
    /// deck is left unchanged.
    pub fn shuffle_with<R>(&mut self, rng: &mut R) -> Result<(), ShuffleError>
    where
        R: TryCryptoRng + ?Sized,
    {
        self.cards = shuffled(self.cards.clone(), rng)?;
        debug!(cards = self.cards.len(), "deck shuffled");
        Ok(())
    }

    /// Removes the first `count` cards and returns them in order.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::NotEnoughCards`] if `count` exceeds the number
    /// of cards left. The deck is left unchanged.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DrawError> {
        let available = self.cards.len();
        if count > available {
            warn!(requested = count, available, "draw refused");
            return Err(DrawError::NotEnoughCards {
                requested: count,
                available,
            });
        }

        let hand: Vec<Card> = self.cards.drain(..count).collect();
        debug!(drawn = count, remaining = self.cards.len(), "cards drawn");
        Ok(hand)
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Returns the `remaining` cards in a uniformly random order.
///
/// Picks one card at a time from the remaining pile at a random index and
/// closes the gap, keeping the rest of the pile in order.
fn shuffled<R>(mut remaining: Vec<Card>, rng: &mut R) -> Result<Vec<Card>, ShuffleError>
where
    R: TryCryptoRng + ?Sized,
{
    let mut result = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let index = uniform_index(rng, remaining.len()).map_err(|err| {
            warn!(error = %err, "secure random source failed during shuffle");
            ShuffleError::RandomnessUnavailable
        })?;
        result.push(remaining.remove(index));
    }

    Ok(result)
}
