use anyhow::{Context, Result, bail};
use hangman::cli::{CliInterface, parse_cli};
use hangman::tui::TuiInterface;
use hangman::{Game, GameInterface, TOTAL_WORDS, game_loop, info_log, logging};
use std::io;

fn main() -> Result<()> {
    let cli = parse_cli();
    logging::init(cli.log_file.as_deref()).context("failed to open log file")?;

    let mut game = match cli.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };
    if let Some(index) = cli.word_index
        && !game.start_with(index)
    {
        bail!("--word must be between 0 and {}, got {index}", TOTAL_WORDS - 1);
    }

    if cli.tui {
        let mut interface = TuiInterface::new().context("failed to initialize terminal UI")?;
        run(&mut game, &mut interface)?;
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock(), io::stdout());
        run(&mut game, &mut interface)?;
    }

    info_log!("Session finished");
    Ok(())
}

fn run(game: &mut Game, interface: &mut dyn GameInterface) -> Result<()> {
    game_loop(game, interface).context("game loop failed")
}
