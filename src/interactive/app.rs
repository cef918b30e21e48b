//! TUI application state and logic

use crate::dictionary::WordSet;
use crate::game::{Game, Outcome};
use crate::output::formatters::{rejection_message, rejection_title};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input the buffer will hold; no root word comes close
const INPUT_CAP: usize = 32;

/// Application state
pub struct App {
    pub game: Game<WordSet>,
    pub roots: Vec<String>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub sessions_played: usize,
    pub words_found: usize,
    pub best_score: u32,
}

impl App {
    #[must_use]
    pub fn new(lexicon: WordSet, roots: Vec<String>) -> Self {
        Self {
            game: Game::new(lexicon),
            roots,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Build words from the root word's letters.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Start a fresh session with a newly chosen root word
    ///
    /// # Errors
    ///
    /// Fails if the root-word list is empty.
    pub fn new_game(&mut self) -> Result<()> {
        let root = self
            .game
            .start_session(&self.roots, &mut rand::rng())?
            .root()
            .to_string();

        self.stats.sessions_played += 1;
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message(
            &format!("New root word: {}", root.to_uppercase()),
            MessageStyle::Info,
        );
        self.add_message("Type a word and press Enter.", MessageStyle::Info);
        Ok(())
    }

    /// Submit the current input buffer to the game
    pub fn submit_input(&mut self) {
        let raw = self.input_buffer.clone();
        self.input_buffer.clear();

        match self.game.submit(&raw) {
            Ok(Outcome::Accepted { word, gained }) => {
                let score = self.score();
                self.stats.words_found += 1;
                self.stats.best_score = self.stats.best_score.max(score);
                self.add_message(
                    &format!("{} +{gained} — score {score}", word.to_uppercase()),
                    MessageStyle::Success,
                );
            }
            Ok(Outcome::Rejected(reason)) => {
                let root = self.root().to_string();
                self.add_message(
                    &format!(
                        "{}: {}",
                        rejection_title(reason),
                        rejection_message(reason, &root)
                    ),
                    MessageStyle::Error,
                );
            }
            Ok(Outcome::Ignored) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the recent tail
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Current root word, or empty before the first session
    #[must_use]
    pub fn root(&self) -> &str {
        self.game.session().map_or("", |s| s.root())
    }

    /// Current score
    #[must_use]
    pub fn score(&self) -> u32 {
        self.game.session().map_or(0, crate::game::Session::score)
    }

    /// Accepted words, newest first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        self.game.session().map_or(&[], crate::game::Session::used_words)
    }

    pub fn push_input(&mut self, c: char) {
        if self.input_buffer.chars().count() < INPUT_CAP {
            self.input_buffer.push(c);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, the root-word list is
/// empty, or there's an I/O error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    // First session; an empty word list surfaces here as a recoverable error
    app.new_game()?;

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_game()?;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => {
                    app.push_input(c);
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    app.submit_input();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let lexicon = WordSet::from_words(["list", "tins", "tin"]);
        App::new(lexicon, vec!["silent".to_string()])
    }

    #[test]
    fn new_game_starts_a_session() {
        let mut app = app();
        app.new_game().unwrap();

        assert_eq!(app.root(), "silent");
        assert_eq!(app.score(), 0);
        assert_eq!(app.stats.sessions_played, 1);
    }

    #[test]
    fn new_game_with_empty_roots_fails() {
        let lexicon = WordSet::from_words(["list"]);
        let mut app = App::new(lexicon, Vec::new());
        assert!(app.new_game().is_err());
    }

    #[test]
    fn submit_input_scores_accepted_words() {
        let mut app = app();
        app.new_game().unwrap();

        app.input_buffer.push_str("list");
        app.submit_input();

        assert_eq!(app.score(), 4);
        assert_eq!(app.used_words(), ["list"]);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.stats.words_found, 1);
        assert_eq!(app.stats.best_score, 4);
    }

    #[test]
    fn submit_input_reports_rejections() {
        let mut app = app();
        app.new_game().unwrap();

        app.input_buffer.push_str("xyz");
        app.submit_input();

        assert_eq!(app.score(), 0);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn blank_input_adds_no_message() {
        let mut app = app();
        app.new_game().unwrap();
        let before = app.messages.len();

        app.submit_input();
        assert_eq!(app.messages.len(), before);
    }

    #[test]
    fn input_buffer_is_capped() {
        let mut app = app();
        for _ in 0..100 {
            app.push_input('a');
        }
        assert_eq!(app.input_buffer.chars().count(), INPUT_CAP);
    }

    #[test]
    fn best_score_survives_new_game() {
        let mut app = app();
        app.new_game().unwrap();
        app.input_buffer.push_str("list");
        app.submit_input();

        app.new_game().unwrap();
        assert_eq!(app.score(), 0);
        assert_eq!(app.stats.best_score, 4);
        assert_eq!(app.stats.sessions_played, 2);
    }
}
