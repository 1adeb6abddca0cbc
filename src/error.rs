//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur while drawing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// More cards were requested than the deck holds.
    #[error("not enough cards left in the deck: requested {requested}, available {available}")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards in the deck at the time of the request.
        available: usize,
    },
}

/// Errors that can occur while shuffling or initializing a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShuffleError {
    /// The secure random source could not produce a value.
    #[error("secure random source unavailable")]
    RandomnessUnavailable,
}

/// Errors that can occur while generating a dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// The first name list is empty.
    #[error("no first names configured")]
    NoFirstNames,
    /// The last name list is empty.
    #[error("no last names configured")]
    NoLastNames,
}
