//! TUI application state and logic

use crate::core::{HintTable, LetterSet, MIN_WORD_LENGTH, Rank, normalize_word};
use crate::puzzle::PuzzleRecord;
use crate::session::SessionRecord;
use crate::store::Bound;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::seq::SliceRandom;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'s> {
    pub session: Bound<'s, SessionRecord>,
    pub puzzle: PuzzleRecord,
    /// Outside letters in display order; Tab reshuffles them
    pub outside: [char; 6],
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'s> App<'s> {
    /// Load the session's puzzle and greet the player
    ///
    /// # Errors
    ///
    /// Returns an error if the session's puzzle is no longer stored.
    pub fn new(session: Bound<'s, SessionRecord>) -> Result<Self> {
        let puzzle = session.puzzle()?;
        let outside = *puzzle.letters().outside();
        let greeting = format!(
            "Make words of {MIN_WORD_LENGTH}+ letters using {}.",
            puzzle.letters().center()
        );
        let mut app = Self {
            session,
            puzzle,
            outside,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(&greeting, MessageStyle::Info);
        Ok(app)
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Guess whatever is in the input buffer and clear it
    pub fn submit_guess(&mut self) {
        let word = normalize_word(&self.input_buffer);
        self.input_buffer.clear();
        if word.is_empty() {
            return;
        }

        match self.session.guess(&word) {
            Ok(judgement) if !judgement.is_accepted() => {
                let reason = rejection_reason(self.puzzle.letters(), &word);
                self.add_message(
                    &format!("{}: {reason}", word.to_uppercase()),
                    MessageStyle::Error,
                );
            }
            Ok(judgement) if judgement.is_already_gotten() => {
                self.add_message(
                    &format!("{}: already found", word.to_uppercase()),
                    MessageStyle::Info,
                );
            }
            Ok(judgement) => {
                let points = self.puzzle.point_value(&word);
                let text = if judgement.is_pangram() {
                    format!("🍳 PANGRAM! {} +{points}", word.to_uppercase())
                } else {
                    format!("{} +{points}", word.to_uppercase())
                };
                self.add_message(&text, MessageStyle::Success);
                if self.found_count() == self.puzzle.answers().len() {
                    self.add_message("👑 Queen Bee! Every word found.", MessageStyle::Success);
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn shuffle(&mut self) {
        self.outside.shuffle(&mut rand::rng());
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.session.gotten_words().len()
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        let words: Vec<&str> = self.session.gotten_words().iter().map(String::as_str).collect();
        self.puzzle.valid_words_to_points(&words)
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.puzzle.ranking(self.session.gotten_words())
    }

    #[must_use]
    pub fn hints(&self) -> HintTable {
        self.puzzle.hints(self.session.gotten_words())
    }
}

/// Why a word that is not an answer was turned down
#[must_use]
pub fn rejection_reason(letters: &LetterSet, word: &str) -> &'static str {
    if word.chars().count() < MIN_WORD_LENGTH {
        "too short"
    } else if !word.chars().all(|c| letters.contains(c)) {
        "bad letters"
    } else if !word.chars().any(|c| c.eq_ignore_ascii_case(&letters.center())) {
        "missing center letter"
    } else {
        "not in word list"
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
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
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Tab => app.shuffle(),
                KeyCode::Enter => app.submit_guess(),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Char(c) => app.push_char(c),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
