//! Hangman game engine
//!
//! `Game` owns the dictionary and runs one round at a time:
//! `NotStarted` → `Playing` → `Won` | `Lost`, and back to `Playing` through
//! [`Game::start`]. Nothing else mutates the state.

use crate::letter::Letter;
use crate::word::Word;
use crate::wordbank::{TOTAL_WORDS, load_dictionary};
use crate::{debug_log, info_log};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Incorrect guesses allowed per round.
pub const MAX_ATTEMPTS: u8 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    Playing,
    Won,
    Lost,
}

pub struct Game {
    dictionary: Vec<Word>,
    current_word: Option<usize>,
    guesses: Vec<Letter>,
    attempts_remaining: u8,
    state: GameState,
    rng: StdRng,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game whose word selection is seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a game with reproducible word selection.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            dictionary: load_dictionary(),
            current_word: None,
            guesses: Vec::new(),
            attempts_remaining: MAX_ATTEMPTS,
            state: GameState::NotStarted,
            rng,
        }
    }

    /// Start a new round with a word drawn uniformly from the dictionary.
    ///
    /// Every round is an independent draw, so the same word may come up twice
    /// in a row.
    pub fn start(&mut self) {
        let index = self.rng.random_range(0..self.dictionary.len());
        self.reset_round(index);
    }

    /// Start a new round with the word at `index`.
    ///
    /// Returns false and leaves the game untouched if `index` is out of range.
    pub fn start_with(&mut self, index: usize) -> bool {
        if index >= self.dictionary.len() {
            debug_log!("start_with() - index {} out of range", index);
            return false;
        }
        self.reset_round(index);
        true
    }

    fn reset_round(&mut self, index: usize) {
        self.current_word = Some(index);
        self.guesses.clear();
        self.attempts_remaining = MAX_ATTEMPTS;
        self.state = GameState::Playing;
        info_log!(
            "New round started with word #{} ({} letters)",
            index,
            self.dictionary[index].len()
        );
    }

    /// Play a letter.
    ///
    /// Returns true only when the letter is new and in the word. Guesses made
    /// outside a round, or repeating an earlier guess in any case, are ignored
    /// and return false.
    pub fn guess(&mut self, letter: Letter) -> bool {
        if self.state != GameState::Playing {
            debug_log!("guess() - '{}' ignored, state is {:?}", letter, self.state);
            return false;
        }
        if self.already_guessed(letter) {
            debug_log!("guess() - '{}' already played", letter);
            return false;
        }
        let Some(index) = self.current_word else {
            return false;
        };
        let word = &self.dictionary[index];

        self.guesses.push(letter);

        if word.contains(letter) {
            if word.is_complete(&self.guesses) {
                self.state = GameState::Won;
                info_log!("Round won after {} guesses", self.guesses.len());
            }
            debug_log!("guess() - '{}' hit", letter);
            return true;
        }

        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        if self.attempts_remaining == 0 {
            self.state = GameState::Lost;
            info_log!("Round lost, word was '{}'", word);
        }
        debug_log!(
            "guess() - '{}' missed, {} attempts left",
            letter,
            self.attempts_remaining
        );
        false
    }

    #[must_use]
    pub fn current_word(&self) -> Option<&Word> {
        self.current_word.map(|i| &self.dictionary[i])
    }

    /// Dictionary lookup by position.
    #[must_use]
    pub fn word_at(&self, index: usize) -> Option<&Word> {
        if index < TOTAL_WORDS {
            self.dictionary.get(index)
        } else {
            None
        }
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    #[must_use]
    pub fn guesses(&self) -> &[Letter] {
        &self.guesses
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.state, GameState::Won | GameState::Lost)
    }

    /// The masked current word, or an empty list before the first round.
    #[must_use]
    pub fn reveal(&self) -> Vec<char> {
        self.current_word()
            .map(|w| w.reveal(&self.guesses))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn already_guessed(&self, letter: Letter) -> bool {
        self.guesses.iter().any(|g| g.equals(letter))
    }

    /// Guesses that missed, in the order they were played.
    #[must_use]
    pub fn wrong_guesses(&self) -> Vec<Letter> {
        match self.current_word() {
            Some(word) => self
                .guesses
                .iter()
                .copied()
                .filter(|&g| !word.contains(g))
                .collect(),
            None => Vec::new(),
        }
    }
}
