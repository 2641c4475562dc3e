use std::fmt;
use std::hash::{Hash, Hasher};

/// A single played or hidden character.
///
/// Two letters are equal when their lowercase forms match, so `'M'` and `'m'`
/// are the same letter for every purpose in the game.
#[derive(Debug, Clone, Copy)]
pub struct Letter(char);

impl Letter {
    #[must_use]
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// The character as it was entered, case preserved.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Case-insensitive comparison.
    #[must_use]
    pub fn equals(self, other: Self) -> bool {
        self.0.to_lowercase().eq(other.0.to_lowercase())
    }
}

impl PartialEq for Letter {
    fn eq(&self, other: &Self) -> bool {
        self.equals(*other)
    }
}

impl Eq for Letter {}

impl Hash for Letter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.0.to_lowercase() {
            c.hash(state);
        }
    }
}

impl From<char> for Letter {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
