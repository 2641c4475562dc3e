// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod gallows;
pub mod game;
pub mod game_state;
pub mod letter;
pub mod logging;
pub mod tui;
pub mod word;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use game::{Game, GameState, MAX_ATTEMPTS};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use letter::Letter;
pub use word::{PLACEHOLDER, Word, WordError};
pub use wordbank::{DICTIONARY, TOTAL_WORDS, load_dictionary};
