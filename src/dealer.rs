//! Dealer name generation.

use core::fmt;

use alloc::string::String;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::DealerError;
use crate::options::DealerNames;

/// A dealer with a randomly chosen name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dealer {
    first_name: String,
    last_name: String,
}

impl Dealer {
    /// Picks a random first and last name from `names`.
    ///
    /// # Errors
    ///
    /// Returns [`DealerError::NoFirstNames`] or [`DealerError::NoLastNames`]
    /// if the corresponding list is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Dealer, DealerNames};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let dealer = Dealer::generate(&DealerNames::default(), &mut rng)?;
    /// assert!(!dealer.first_name().is_empty());
    /// # Ok::<(), deckrs::DealerError>(())
    /// ```
    pub fn generate<R>(names: &DealerNames, rng: &mut R) -> Result<Self, DealerError>
    where
        R: Rng + ?Sized,
    {
        let first_name = names
            .first_names
            .choose(rng)
            .ok_or(DealerError::NoFirstNames)?
            .clone();
        let last_name = names
            .last_names
            .choose(rng)
            .ok_or(DealerError::NoLastNames)?
            .clone();

        Ok(Self {
            first_name,
            last_name,
        })
    }

    /// Returns the dealer's first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the dealer's last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl fmt::Display for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
