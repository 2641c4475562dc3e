use crate::game::{Game, GameState};
use crate::info_log;
use crate::letter::Letter;
use std::io;

/// What the player asked for on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(char),
    NewGame,
    Exit,
}

/// Everything a front-end has to provide to drive rounds of the game.
///
/// The console and the terminal UI both implement this; `game_loop` only
/// talks to the player through it.
pub trait GameInterface {
    fn display_welcome(&mut self) -> io::Result<()>;

    fn display_round(&mut self, game: &Game) -> io::Result<()>;

    /// Read the next action. `Ok(None)` means the input was rejected and the
    /// turn should be asked again.
    fn read_action(&mut self) -> io::Result<Option<UserAction>>;

    fn display_guess_result(&mut self, letter: Letter, hit: bool) -> io::Result<()>;

    fn display_already_guessed(&mut self, letter: Letter) -> io::Result<()>;

    fn display_round_over(&mut self, game: &Game) -> io::Result<()>;

    fn read_play_again(&mut self) -> io::Result<bool>;

    fn display_new_game_message(&mut self, game: &Game) -> io::Result<()>;

    fn display_exit_message(&mut self) -> io::Result<()>;
}

/// Play rounds until the player exits.
///
/// A round already in progress on `game` is continued; otherwise a new one is
/// started.
///
/// # Errors
/// Returns any I/O error raised by the interface.
pub fn game_loop<I>(game: &mut Game, interface: &mut I) -> io::Result<()>
where
    I: GameInterface + ?Sized,
{
    interface.display_welcome()?;
    if game.state() != GameState::Playing {
        game.start();
    }
    interface.display_new_game_message(game)?;

    loop {
        while game.state() == GameState::Playing {
            interface.display_round(game)?;
            let letter = match interface.read_action()? {
                None => continue,
                Some(UserAction::Exit) => {
                    info_log!("Player exited mid-round");
                    return interface.display_exit_message();
                }
                Some(UserAction::NewGame) => {
                    game.start();
                    interface.display_new_game_message(game)?;
                    continue;
                }
                Some(UserAction::Guess(c)) => Letter::new(c),
            };

            if game.already_guessed(letter) {
                interface.display_already_guessed(letter)?;
                continue;
            }
            let hit = game.guess(letter);
            interface.display_guess_result(letter, hit)?;
        }

        interface.display_round_over(game)?;
        if !interface.read_play_again()? {
            return interface.display_exit_message();
        }
        game.start();
        interface.display_new_game_message(game)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    const CICLO: usize = 3;

    /// Feeds canned actions and records what the loop asked it to show.
    #[derive(Default)]
    struct ScriptedInterface {
        actions: VecDeque<Option<UserAction>>,
        play_again: VecDeque<bool>,
        events: Vec<String>,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>, play_again: Vec<bool>) -> Self {
            Self {
                actions: actions.into(),
                play_again: play_again.into(),
                events: Vec::new(),
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_welcome(&mut self) -> io::Result<()> {
            self.events.push("welcome".to_string());
            Ok(())
        }

        fn display_round(&mut self, _game: &Game) -> io::Result<()> {
            Ok(())
        }

        fn read_action(&mut self) -> io::Result<Option<UserAction>> {
            Ok(self.actions.pop_front().unwrap_or(Some(UserAction::Exit)))
        }

        fn display_guess_result(&mut self, letter: Letter, hit: bool) -> io::Result<()> {
            self.events.push(format!("{letter}:{hit}"));
            Ok(())
        }

        fn display_already_guessed(&mut self, letter: Letter) -> io::Result<()> {
            self.events.push(format!("repeat:{letter}"));
            Ok(())
        }

        fn display_round_over(&mut self, game: &Game) -> io::Result<()> {
            self.events.push(format!("over:{:?}", game.state()));
            Ok(())
        }

        fn read_play_again(&mut self) -> io::Result<bool> {
            Ok(self.play_again.pop_front().unwrap_or(false))
        }

        fn display_new_game_message(&mut self, _game: &Game) -> io::Result<()> {
            self.events.push("new".to_string());
            Ok(())
        }

        fn display_exit_message(&mut self) -> io::Result<()> {
            self.events.push("exit".to_string());
            Ok(())
        }
    }

    fn guesses(word: &str) -> Vec<Option<UserAction>> {
        word.chars().map(|c| Some(UserAction::Guess(c))).collect()
    }

    #[test]
    fn test_game_loop_immediate_exit() {
        let mut game = Game::with_seed(3);
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Exit)], vec![]);
        game_loop(&mut game, &mut interface).unwrap();
        assert_eq!(interface.events, vec!["welcome", "new", "exit"]);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn test_game_loop_win_then_quit() {
        let mut game = Game::new();
        game.start_with(CICLO);
        let mut interface = ScriptedInterface::new(guesses("cilo"), vec![false]);
        game_loop(&mut game, &mut interface).unwrap();
        assert_eq!(
            interface.events,
            vec!["welcome", "new", "c:true", "i:true", "l:true", "o:true", "over:Won", "exit"]
        );
    }

    #[test]
    fn test_game_loop_repeat_is_reported_not_played() {
        let mut game = Game::new();
        game.start_with(CICLO);
        let mut actions = guesses("zZ");
        actions.insert(1, None);
        actions.push(Some(UserAction::Exit));
        let mut interface = ScriptedInterface::new(actions, vec![]);
        game_loop(&mut game, &mut interface).unwrap();
        assert_eq!(
            interface.events,
            vec!["welcome", "new", "z:false", "repeat:Z", "exit"]
        );
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn test_game_loop_loss_then_play_again() {
        let mut game = Game::new();
        game.start_with(CICLO);
        let mut interface = ScriptedInterface::new(guesses("abdefg"), vec![true]);
        game_loop(&mut game, &mut interface).unwrap();
        assert!(interface.events.contains(&"over:Lost".to_string()));
        let news = interface.events.iter().filter(|e| *e == "new").count();
        assert_eq!(news, 2);
        assert_eq!(interface.events.last().map(String::as_str), Some("exit"));
        assert_eq!(game.state(), GameState::Playing);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn test_game_loop_new_game_mid_round() {
        let mut game = Game::with_seed(11);
        let actions = vec![
            Some(UserAction::Guess('q')),
            Some(UserAction::NewGame),
            Some(UserAction::Exit),
        ];
        let mut interface = ScriptedInterface::new(actions, vec![]);
        game_loop(&mut game, &mut interface).unwrap();
        assert!(game.guesses().is_empty());
        let news = interface.events.iter().filter(|e| *e == "new").count();
        assert_eq!(news, 2);
    }
}
