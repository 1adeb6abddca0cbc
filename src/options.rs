//! Dealer name configuration.

use alloc::string::String;
use alloc::vec::Vec;

const DEFAULT_FIRST_NAMES: [&str; 12] = [
    "Alice", "Ben", "Carmen", "Dmitri", "Elena", "Felix", "Grace", "Hiro", "Ines", "Jonas",
    "Keiko", "Luis",
];

const DEFAULT_LAST_NAMES: [&str; 12] = [
    "Alvarez", "Brooks", "Chen", "Duval", "Eriksen", "Fontaine", "Garcia", "Hughes", "Ivanova",
    "Jensen", "Kowalski", "Moreau",
];

/// Name lists used to generate a [`Dealer`](crate::Dealer).
///
/// Use the builder methods to replace the built-in lists:
///
/// ```
/// use deckrs::DealerNames;
///
/// let names = DealerNames::default()
///     .with_first_names(["Ada", "Grace"])
///     .with_last_names(["Lovelace"]);
/// assert_eq!(names.first_names.len(), 2);
/// assert_eq!(names.last_names, vec!["Lovelace".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerNames {
    /// Candidate first names.
    pub first_names: Vec<String>,
    /// Candidate last names.
    pub last_names: Vec<String>,
}

impl Default for DealerNames {
    fn default() -> Self {
        Self {
            first_names: DEFAULT_FIRST_NAMES.map(String::from).to_vec(),
            last_names: DEFAULT_LAST_NAMES.map(String::from).to_vec(),
        }
    }
}

impl DealerNames {
    /// Replaces the first name list.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DealerNames;
    ///
    /// let names = DealerNames::default().with_first_names(["Ada"]);
    /// assert_eq!(names.first_names, vec!["Ada".to_string()]);
    /// ```
    #[must_use]
    pub fn with_first_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.first_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the last name list.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DealerNames;
    ///
    /// let names = DealerNames::default().with_last_names(["Hopper"]);
    /// assert_eq!(names.last_names, vec!["Hopper".to_string()]);
    /// ```
    #[must_use]
    pub fn with_last_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.last_names = names.into_iter().map(Into::into).collect();
        self
    }
}
