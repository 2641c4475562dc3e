//! Hidden word representation
//!
//! A `Word` is the ordered list of letters the player is trying to uncover.
//! Matching is always case-insensitive and goes through [`Letter::equals`].

use crate::letter::Letter;
use std::fmt;

/// Marker shown for a position whose letter has not been guessed yet.
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<Letter>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
        }
    }
}

impl std::error::Error for WordError {}

fn find_letter(letter: Letter, list: &[Letter]) -> bool {
    list.iter().any(|l| l.equals(letter))
}

impl Word {
    /// Build a word with one [`Letter`] per character of `text`, order preserved.
    ///
    /// # Errors
    /// Returns `WordError::Empty` if `text` has no characters.
    ///
    /// # Examples
    /// ```
    /// use hangman::word::Word;
    ///
    /// let word = Word::new("ciclo").unwrap();
    /// assert_eq!(word.len(), 5);
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        let letters = text.chars().map(Letter::new).collect();
        Ok(Self { text, letters })
    }

    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// True if any letter of the word matches `letter`.
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        find_letter(letter, &self.letters)
    }

    /// True once every letter of the word has a match in `guesses`.
    ///
    /// Guesses that are not in the word do not matter here, and a repeated
    /// letter is covered by a single guess.
    #[must_use]
    pub fn is_complete(&self, guesses: &[Letter]) -> bool {
        self.letters.iter().all(|&l| find_letter(l, guesses))
    }

    /// Project the word through `guesses`: each position shows its character
    /// if guessed, [`PLACEHOLDER`] otherwise.
    #[must_use]
    pub fn reveal(&self, guesses: &[Letter]) -> Vec<char> {
        self.letters
            .iter()
            .map(|&l| {
                if find_letter(l, guesses) {
                    l.as_char()
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
