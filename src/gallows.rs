//! Gallows art, one stage per number of attempts left.

use crate::game::MAX_ATTEMPTS;

const STAGES: [&str; MAX_ATTEMPTS as usize + 1] = [
    r"  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"  +---+
  |   |
      |
      |
      |
      |
=========",
];

/// The drawing for `attempts_remaining`; values above the maximum show the
/// empty gallows.
#[must_use]
pub fn stage(attempts_remaining: u8) -> &'static str {
    STAGES[usize::from(attempts_remaining.min(MAX_ATTEMPTS))]
}

/// Short caption that goes with each stage.
#[must_use]
pub fn caption(attempts_remaining: u8) -> String {
    match attempts_remaining {
        0 => "Hanged!".to_string(),
        1 => "Careful! Only 1 attempt left".to_string(),
        n if n >= MAX_ATTEMPTS => format!("You have {MAX_ATTEMPTS} attempts. Let's go!"),
        n => format!("{n} attempts left"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_stage_per_attempt_count() {
        for n in 0..=MAX_ATTEMPTS {
            assert_eq!(stage(n).lines().count(), 7, "stage {n}");
        }
        assert_eq!(stage(MAX_ATTEMPTS + 3), stage(MAX_ATTEMPTS));
    }

    #[test]
    fn test_stages_grow_as_attempts_drop() {
        assert!(!stage(MAX_ATTEMPTS).contains('O'));
        assert!(stage(5).contains('O'));
        assert!(stage(0).contains("/ \\"));
    }

    #[test]
    fn test_caption() {
        assert_eq!(caption(0), "Hanged!");
        assert_eq!(caption(1), "Careful! Only 1 attempt left");
        assert_eq!(caption(3), "3 attempts left");
        assert_eq!(caption(MAX_ATTEMPTS), "You have 6 attempts. Let's go!");
    }
}
