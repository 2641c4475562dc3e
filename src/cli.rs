use crate::debug_log;
use crate::gallows;
use crate::game::{Game, GameState, MAX_ATTEMPTS};
use crate::game_state::{GameInterface, UserAction};
use crate::letter::Letter;
use crate::wordbank::HINT;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Hangman: guess the programming term one letter at a time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Play in the interactive terminal UI instead of the line-based console
    #[arg(long)]
    pub tui: bool,

    /// Seed for word selection, for reproducible rounds
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dictionary position (0-11) of the first round's word
    #[arg(long = "word", value_name = "INDEX")]
    pub word_index: Option<usize>,

    /// Where to write the log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// Input parsing

pub enum GuessInput {
    Valid(char),
    Invalid,
    Exit,
    NewGame,
}

fn parse_guess(input: &str) -> GuessInput {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "exit" => GuessInput::Exit,
        "new" => GuessInput::NewGame,
        _ => {
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_alphabetic() => GuessInput::Valid(c),
                _ => GuessInput::Invalid,
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn format_masked(revealed: &[char]) -> String {
    revealed
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_letters(letters: &[Letter]) -> String {
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Line-based console front-end.
///
/// Reads one line per turn from `reader` and prints everything to `writer`,
/// so tests can drive it with a `Cursor` and inspect the transcript.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Read one line; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input))
    }

    fn display_game_status(&mut self, game: &Game) -> io::Result<()> {
        writeln!(self.writer, "Word: {}", format_masked(&game.reveal()))?;
        writeln!(
            self.writer,
            "Attempts remaining: {}",
            game.attempts_remaining()
        )?;
        if !game.guesses().is_empty() {
            writeln!(self.writer, "Letters played: {}", format_letters(game.guesses()))?;
        }
        let attempts = game.attempts_remaining();
        writeln!(self.writer, "{}", gallows::stage(attempts))?;
        writeln!(self.writer, "{}", gallows::caption(attempts))
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_welcome(&mut self) -> io::Result<()> {
        writeln!(self.writer, "Welcome to Hangman!")?;
        writeln!(self.writer, "Guess the word one letter at a time.")?;
        writeln!(
            self.writer,
            "You have {MAX_ATTEMPTS} attempts before being hanged."
        )?;
        writeln!(self.writer, "Hint: {HINT}")?;
        writeln!(self.writer, "{}", "-".repeat(40))
    }

    fn display_round(&mut self, game: &Game) -> io::Result<()> {
        writeln!(self.writer)?;
        self.display_game_status(game)
    }

    fn read_action(&mut self) -> io::Result<Option<UserAction>> {
        writeln!(
            self.writer,
            "Enter a letter ('new' for a new word, 'exit' to quit):"
        )?;
        self.writer.flush()?;
        let Some(line) = self.read_line()? else {
            debug_log!("read_action() - end of input");
            return Ok(Some(UserAction::Exit));
        };

        match parse_guess(&line) {
            GuessInput::Valid(c) => Ok(Some(UserAction::Guess(c))),
            GuessInput::Exit => Ok(Some(UserAction::Exit)),
            GuessInput::NewGame => Ok(Some(UserAction::NewGame)),
            GuessInput::Invalid => {
                writeln!(self.writer, "Please enter a single valid letter.")?;
                Ok(None)
            }
        }
    }

    fn display_guess_result(&mut self, letter: Letter, hit: bool) -> io::Result<()> {
        if hit {
            writeln!(self.writer, "Good! The letter '{letter}' is in the word.")
        } else {
            writeln!(self.writer, "Oh no! The letter '{letter}' is not in the word.")
        }
    }

    fn display_already_guessed(&mut self, letter: Letter) -> io::Result<()> {
        writeln!(
            self.writer,
            "You already played '{letter}'! Try another one."
        )
    }

    fn display_round_over(&mut self, game: &Game) -> io::Result<()> {
        writeln!(self.writer)?;
        self.display_game_status(game)?;
        match game.state() {
            GameState::Won => writeln!(self.writer, "CONGRATULATIONS! You guessed the word!"),
            GameState::Lost => {
                writeln!(self.writer, "GAME OVER! You have been hanged.")?;
                if let Some(word) = game.current_word() {
                    writeln!(self.writer, "The word was: {word}")?;
                }
                Ok(())
            }
            GameState::NotStarted | GameState::Playing => Ok(()),
        }
    }

    fn read_play_again(&mut self) -> io::Result<bool> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Play again? (y/n):")?;
        self.writer.flush()?;
        Ok(self.read_line()?.is_some_and(|answer| is_yes(&answer)))
    }

    fn display_new_game_message(&mut self, _game: &Game) -> io::Result<()> {
        writeln!(self.writer, "New game started!")
    }

    fn display_exit_message(&mut self) -> io::Result<()> {
        writeln!(self.writer, "Thanks for playing Hangman!")?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_loop;
    use std::io::Cursor;

    const VECTOR: usize = 7;

    fn play(input: &str) -> (Game, String) {
        let mut game = Game::new();
        game.start_with(VECTOR);
        let mut interface = CliInterface::new(Cursor::new(input), Vec::new());
        game_loop(&mut game, &mut interface).unwrap();
        let output = String::from_utf8(interface.into_writer()).unwrap();
        (game, output)
    }

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::parse_from(["hangman"]);
        assert!(!cli.tui);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.word_index, None);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli = Cli::parse_from([
            "hangman",
            "--tui",
            "--seed",
            "99",
            "--word",
            "4",
            "--log-file",
            "/tmp/hangman.log",
        ]);
        assert!(cli.tui);
        assert_eq!(cli.seed, Some(99));
        assert_eq!(cli.word_index, Some(4));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/hangman.log")));
    }

    #[test]
    fn test_parse_guess() {
        assert!(matches!(parse_guess("a\n"), GuessInput::Valid('a')));
        assert!(matches!(parse_guess("  Q  "), GuessInput::Valid('q')));
        assert!(matches!(parse_guess("ñ"), GuessInput::Valid('ñ')));
        assert!(matches!(parse_guess("EXIT"), GuessInput::Exit));
        assert!(matches!(parse_guess("new"), GuessInput::NewGame));
        assert!(matches!(parse_guess("ab"), GuessInput::Invalid));
        assert!(matches!(parse_guess("7"), GuessInput::Invalid));
        assert!(matches!(parse_guess(""), GuessInput::Invalid));
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes("YES"));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
    }

    #[test]
    fn test_format_masked() {
        assert_eq!(format_masked(&['c', '_', 'c']), "c _ c");
        assert_eq!(format_masked(&[]), "");
    }

    #[test]
    fn test_cli_win() {
        let (game, output) = play("v\ne\nc\nt\no\nr\nn\n");
        assert_eq!(game.state(), GameState::Won);
        assert!(output.contains("Welcome to Hangman!"));
        assert!(output.contains("Good! The letter 'v' is in the word."));
        assert!(output.contains("CONGRATULATIONS! You guessed the word!"));
        assert!(output.contains("Word: v e c t o r"));
        assert!(output.ends_with("Thanks for playing Hangman!\n"));
    }

    #[test]
    fn test_cli_loss_shows_word() {
        let (game, output) = play("a\nb\nd\nf\ng\nh\nno\n");
        assert_eq!(game.state(), GameState::Lost);
        assert!(output.contains("Oh no! The letter 'a' is not in the word."));
        assert!(output.contains("GAME OVER! You have been hanged."));
        assert!(output.contains("The word was: vector"));
        assert!(output.contains(gallows::stage(0)));
    }

    #[test]
    fn test_cli_invalid_and_repeated_input() {
        let (game, output) = play("xy\n3\nz\nZ\nexit\n");
        assert!(output.contains("Please enter a single valid letter."));
        assert!(output.contains("You already played 'z'! Try another one."));
        assert!(output.contains("Letters played: z"));
        assert_eq!(game.guesses().len(), 1);
        assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS - 1);
    }

    #[test]
    fn test_cli_eof_exits() {
        let (game, output) = play("v\n");
        assert_eq!(game.state(), GameState::Playing);
        assert!(output.ends_with("Thanks for playing Hangman!\n"));
    }

    #[test]
    fn test_cli_play_again() {
        let (game, output) = play("v\ne\nc\nt\no\nr\nyes\nexit\n");
        assert_eq!(output.matches("New game started!").count(), 2);
        assert_eq!(game.state(), GameState::Playing);
        assert!(game.guesses().is_empty());
    }
}
