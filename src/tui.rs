//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Layout
//! Gallows on the left; masked word, on-screen keyboard and messages on the
//! right; status and key help along the bottom.
//!
//! # State Machine
//! - `Playing` → `RoundOver` when the game reports a win or a loss
//! - `RoundOver` → `Playing` when the player asks for a new word

use crate::gallows;
use crate::game::{Game, GameState, MAX_ATTEMPTS};
use crate::game_state::{GameInterface, UserAction};
use crate::letter::Letter;
use crate::wordbank::HINT;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const KEYBOARD_ROWS: [&str; 3] = ["ABCDEFGHI", "JKLMNÑOPQ", "RSTUVWXYZ"];
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const GALLOWS_PANEL_WIDTH: u16 = 22;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const WORD_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

#[derive(Clone, Copy, PartialEq, Debug)]
enum KeyState {
    Unplayed,
    Hit,
    Miss,
}

impl KeyState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Unplayed => (Color::Blue, Color::White),
            Self::Hit => (Color::Green, Color::Black),
            Self::Miss => (Color::Red, Color::White),
        }
    }
}

#[derive(Debug, PartialEq)]
enum TuiState {
    Playing,
    /// Round finished - outcome stored in interface.message
    RoundOver,
}

/// What the screen shows of the game, copied out each time the loop hands
/// us a `&Game`.
#[derive(Debug)]
struct RoundView {
    revealed: Vec<char>,
    attempts_remaining: u8,
    guesses: Vec<Letter>,
    misses: Vec<Letter>,
    state: GameState,
}

impl RoundView {
    fn empty() -> Self {
        Self {
            revealed: Vec::new(),
            attempts_remaining: MAX_ATTEMPTS,
            guesses: Vec::new(),
            misses: Vec::new(),
            state: GameState::NotStarted,
        }
    }

    fn from_game(game: &Game) -> Self {
        Self {
            revealed: game.reveal(),
            attempts_remaining: game.attempts_remaining(),
            guesses: game.guesses().to_vec(),
            misses: game.wrong_guesses(),
            state: game.state(),
        }
    }

    fn key_state(&self, key: char) -> KeyState {
        let letter = Letter::new(key);
        if self.misses.iter().any(|m| m.equals(letter)) {
            KeyState::Miss
        } else if self.guesses.iter().any(|g| g.equals(letter)) {
            KeyState::Hit
        } else {
            KeyState::Unplayed
        }
    }
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    view: &'a RoundView,
    state: &'a TuiState,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    view: RoundView,
    state: TuiState,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            view: RoundView::empty(),
            state: TuiState::Playing,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            view: &self.view,
            state: &self.state,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Min(14),    // Board
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        let board = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GALLOWS_PANEL_WIDTH), Constraint::Min(30)])
            .split(chunks[1]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Word + hint
                Constraint::Length(5), // Keyboard
                Constraint::Min(4),    // Messages
            ])
            .split(board[1]);

        Self::render_title(f, chunks[0]);
        Self::render_gallows(f, board[0], ctx.view.attempts_remaining);
        Self::render_word(f, right[0], &ctx.view.revealed);
        Self::render_keyboard(f, right[1], ctx.view);
        Self::render_info(f, right[2], ctx);
        Self::render_status(f, chunks[2], ctx.status);
        Self::render_instructions(f, chunks[3], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_gallows(f: &mut Frame, area: Rect, attempts_remaining: u8) {
        let mut lines: Vec<Line> = gallows::stage(attempts_remaining)
            .lines()
            .map(Line::from)
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Attempts: {attempts_remaining}/{MAX_ATTEMPTS}"),
            INFO_STYLE,
        )));

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Gallows").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_word(f: &mut Frame, area: Rect, revealed: &[char]) {
        let word = if revealed.is_empty() {
            "Press N to start".to_string()
        } else {
            revealed
                .iter()
                .map(|c| c.to_uppercase().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };

        let lines = vec![
            Line::from(Span::styled(word, WORD_STYLE)),
            Line::from(Span::styled(format!("Hint: {HINT}"), MESSAGE_STYLE)),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title("Word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_keyboard(f: &mut Frame, area: Rect, view: &RoundView) {
        let lines: Vec<Line> = KEYBOARD_ROWS
            .iter()
            .map(|row| {
                let mut spans = Vec::new();
                for key in row.chars() {
                    let (bg_color, fg_color) = view.key_state(key).colors();
                    spans.push(Span::styled(
                        format!(" {key} "),
                        Style::default().fg(fg_color).bg(bg_color),
                    ));
                    spans.push(Span::raw(" "));
                }
                Line::from(spans)
            })
            .collect();

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title("Letters").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if !ctx.view.misses.is_empty() {
            let missed = ctx
                .view
                .misses
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(Line::from(vec![Span::styled(
                format!("Missed: {missed}"),
                INFO_STYLE,
            )]));
        }

        if !ctx.message.is_empty() {
            let style = match ctx.view.state {
                GameState::Won => SUCCESS_STYLE,
                GameState::Lost => ERROR_STYLE,
                GameState::NotStarted | GameState::Playing => MESSAGE_STYLE,
            };
            lines.push(Line::from(vec![Span::styled(ctx.message, style)]));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::Playing => "Type a letter to guess | CTRL+N: New word | ESC: Quit",
            TuiState::RoundOver => "N / ENTER: Play again | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    /// Wait for the next key press, or `None` if nothing arrived in time or the
    /// event was not a usable key.
    fn next_key() -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let event = event::read()?;
        match event {
            Event::Mouse(_)
            | Event::FocusGained
            | Event::FocusLost
            | Event::Paste(_)
            | Event::Resize(_, _) => {
                debug_log!("next_key() - Ignoring non-key event: {:?}", event);
                Ok(None)
            }
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }

                // Alt-tabbing can leak replacement and control characters
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
                {
                    debug_log!("next_key() - Ignoring invalid character: {:?}", c);
                    return Ok(None);
                }

                debug_log!(
                    "next_key() - Key event received: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                Ok(Some(key))
            }
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn handle_playing_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
                KeyCode::Char('c' | 'C') => Some(UserAction::Exit),
                _ => None,
            };
        }
        if Self::has_modifier_keys(&key) {
            debug_log!(
                "handle_playing_input() - Ignoring key with modifier: {:?}",
                key.modifiers
            );
            return None;
        }

        match key.code {
            KeyCode::Esc => {
                info_log!("handle_playing_input() - ESC pressed, returning Exit");
                Some(UserAction::Exit)
            }
            KeyCode::Char(c) if c.is_alphabetic() => {
                let c = c.to_lowercase().next().unwrap_or(c);
                Some(UserAction::Guess(c))
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
                None
            }
            _ => None,
        }
    }

    fn handle_round_over_input(key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Char('n' | 'N') | KeyCode::Enter => Some(true),
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(false),
            KeyCode::Char('c' | 'C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(false)
            }
            _ => None,
        }
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_welcome(&mut self) -> io::Result<()> {
        self.message = format!("Guess the word. You have {MAX_ATTEMPTS} attempts.");
        self.draw()
    }

    fn display_round(&mut self, game: &Game) -> io::Result<()> {
        self.view = RoundView::from_game(game);
        self.state = TuiState::Playing;
        self.status = format!(
            "Playing - {} letters played, {} attempts left",
            self.view.guesses.len(),
            self.view.attempts_remaining
        );
        self.draw()
    }

    fn read_action(&mut self) -> io::Result<Option<UserAction>> {
        loop {
            self.draw()?;
            let Some(key) = Self::next_key()? else {
                continue;
            };
            if let Some(action) = self.handle_playing_input(key) {
                info_log!("read_action() - Action received: {:?}", action);
                return Ok(Some(action));
            }
        }
    }

    fn display_guess_result(&mut self, letter: Letter, hit: bool) -> io::Result<()> {
        self.message = if hit {
            format!("Good! '{letter}' is in the word.")
        } else {
            format!("Sorry, '{letter}' is not in the word.")
        };
        Ok(())
    }

    fn display_already_guessed(&mut self, letter: Letter) -> io::Result<()> {
        self.error_message = format!("You already played '{letter}'! Try another one.");
        Ok(())
    }

    fn display_round_over(&mut self, game: &Game) -> io::Result<()> {
        self.view = RoundView::from_game(game);
        self.state = TuiState::RoundOver;
        self.error_message.clear();
        let word = game.current_word().map(ToString::to_string).unwrap_or_default();
        match game.state() {
            GameState::Won => {
                self.message = format!("✓ You guessed it: {word}");
                self.status = "Game Over - You won!".to_string();
            }
            GameState::Lost => {
                self.message = format!("✗ Hanged! The word was: {word}");
                self.status = "Game Over - You lost".to_string();
            }
            GameState::NotStarted | GameState::Playing => {}
        }
        self.draw()
    }

    fn read_play_again(&mut self) -> io::Result<bool> {
        loop {
            self.draw()?;
            let Some(key) = Self::next_key()? else {
                continue;
            };
            if let Some(again) = Self::handle_round_over_input(key) {
                return Ok(again);
            }
        }
    }

    fn display_new_game_message(&mut self, game: &Game) -> io::Result<()> {
        self.view = RoundView::from_game(game);
        self.state = TuiState::Playing;
        self.message = format!("New word: {} letters.", self.view.revealed.len());
        self.error_message.clear();
        self.status = "New game - Type your first letter".to_string();
        self.draw()
    }

    fn display_exit_message(&mut self) -> io::Result<()> {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
        Ok(())
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
