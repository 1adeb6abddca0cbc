//! Card types and deck utilities.

use core::cmp::Ordering;
use core::fmt;

use alloc::string::{String, ToString};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in the order a fresh deck is built.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }

    /// Returns the symbol used when rendering a card.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Clubs => "♣",
            Self::Diamonds => "♦",
            Self::Hearts => "♥",
            Self::Spades => "♠",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, from Two (lowest) to Ace (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FaceValue {
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
    /// Ace.
    Ace = 14,
}

impl FaceValue {
    /// All face values from Two to Ace.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the numeric rank (2 through 14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the name of the face value.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }

    /// Returns `true` for Jack, Queen, King and Ace.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King | Self::Ace)
    }
}

impl fmt::Display for FaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// `==` compares the full (suit, face value) pair. Game comparisons
/// ([`greater_than`](Self::greater_than), [`less_than`](Self::less_than),
/// [`equal`](Self::equal)) only look at the face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The face value of the card.
    pub face_value: FaceValue,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, face_value: FaceValue) -> Self {
        Self { suit, face_value }
    }

    /// Returns the numeric rank of the card (2 through 14).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.face_value.value()
    }

    /// Compares two cards by face value, ignoring suit.
    #[must_use]
    pub const fn cmp_rank(&self, other: &Self) -> Ordering {
        if self.less_than(other) {
            Ordering::Less
        } else if self.greater_than(other) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Returns `true` if this card outranks `other`.
    #[must_use]
    pub const fn greater_than(&self, other: &Self) -> bool {
        self.value() > other.value()
    }

    /// Returns `true` if `other` outranks this card.
    #[must_use]
    pub const fn less_than(&self, other: &Self) -> bool {
        self.value() < other.value()
    }

    /// Returns `true` if both cards have the same face value.
    #[must_use]
    pub const fn equal(&self, other: &Self) -> bool {
        self.value() == other.value()
    }

    /// Returns `true` for Jack, Queen, King and Ace.
    #[must_use]
    pub const fn is_face_card(&self) -> bool {
        self.face_value.is_face()
    }

    /// Returns the short display token, e.g. `" A♠"` or `"10♦"`.
    #[must_use]
    pub fn to_token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_face_card() {
            let letter = &self.face_value.name()[..1];
            write!(f, "{letter:>2}{}", self.suit.symbol())
        } else {
            write!(f, "{:>2}{}", self.value(), self.suit.symbol())
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns the cards of a standard deck in suit-major order.
pub fn standard_cards() -> impl Iterator<Item = Card> {
    Suit::ALL.into_iter().flat_map(|suit| {
        FaceValue::ALL
            .into_iter()
            .map(move |face_value| Card::new(suit, face_value))
    })
}
