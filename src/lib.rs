//! A standard 52-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that builds a full standard deck,
//! shuffles it with a cryptographically secure random source, and hands out
//! cards from the front. [`Card`] comparisons look at face value only.
//!
//! # Example
//!
//! ```no_run
//! use deckrs::Deck;
//!
//! let mut deck = Deck::new();
//! deck.initialize()?;
//! for card in deck.draw(5)? {
//!     print!("{card} ");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod options;
mod rng;

// Re-export main types
pub use card::{Card, DECK_SIZE, FaceValue, Suit, standard_cards};
pub use dealer::Dealer;
pub use deck::Deck;
pub use error::{DealerError, DrawError, ShuffleError};
pub use options::DealerNames;
