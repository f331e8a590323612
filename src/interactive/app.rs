//! TUI application state and logic

use crate::core::{Feedback, WORD_LENGTH};
use crate::engine::AttemptId;
use crate::error::HelperError;
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which panel receives cursor and label keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Draft,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Editing,
    ConfirmReset,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub session: Session,
    pub focus: Focus,
    pub input_mode: InputMode,
    /// Selected draft cell
    pub draft_cell: usize,
    /// Selected attempt and cell while the history has focus
    pub history_attempt: usize,
    pub history_cell: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            focus: Focus::Draft,
            input_mode: InputMode::Editing,
            draft_cell: 0,
            history_attempt: 0,
            history_cell: 0,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Type a guess, pick a cell with ←/→ and press Space to change its color.",
            MessageStyle::Info,
        );
        app
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

    /// Label of the selected history cell, if the history has an attempt there
    #[must_use]
    pub fn selected_history_cell(&self) -> Option<(char, Feedback)> {
        let attempt = self.session.attempts().get(self.history_attempt)?;
        let letter = attempt.word().char_at(self.history_cell);
        Some((letter, attempt.labels()[self.history_cell]))
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::ConfirmReset => self.handle_confirm(key.code),
            InputMode::Editing => {
                if key.code == KeyCode::Char('r') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.input_mode = InputMode::ConfirmReset;
                    return;
                }
                match key.code {
                    KeyCode::Esc => self.should_quit = true,
                    KeyCode::Tab => self.toggle_focus(),
                    _ => match self.focus {
                        Focus::Draft => self.handle_draft_key(key.code),
                        Focus::History => self.handle_history_key(key.code),
                    },
                }
            }
        }
    }

    fn handle_confirm(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('y' | 'Y' | 'д' | 'Д') | KeyCode::Enter => {
                self.session.reset();
                self.input_mode = InputMode::Editing;
                self.focus = Focus::Draft;
                self.draft_cell = 0;
                self.history_attempt = 0;
                self.history_cell = 0;
                self.add_message("All attempts cleared.", MessageStyle::Success);
            }
            KeyCode::Char('n' | 'N' | 'н' | 'Н') | KeyCode::Esc => {
                self.input_mode = InputMode::Editing;
            }
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Draft if !self.session.attempts().is_empty() => {
                self.history_attempt = self.session.attempts().len() - 1;
                self.add_message(
                    "History: ↑/↓ attempt, ←/→ cell, 1-5 toggle positions of a yellow letter.",
                    MessageStyle::Info,
                );
                Focus::History
            }
            Focus::Draft => {
                self.add_message("No attempts to refine yet.", MessageStyle::Error);
                Focus::Draft
            }
            Focus::History => Focus::Draft,
        };
    }

    fn handle_draft_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(' ') => {
                self.session.cycle_label(self.draft_cell);
            }
            KeyCode::Char(c) if c.is_alphabetic() => {
                if let Some(index) = self.session.input_letter(c) {
                    self.draft_cell = index;
                }
            }
            KeyCode::Char(c @ '1'..='5') => {
                if self.session.draft().label_at(self.draft_cell) == Some(Feedback::Present) {
                    let text = format!("Submit first, then refine {c} from the history (Tab).");
                    self.add_message(&text, MessageStyle::Info);
                }
            }
            KeyCode::Backspace => {
                if let Some(index) = self.session.backspace() {
                    self.draft_cell = index.saturating_sub(1);
                }
            }
            KeyCode::Left => self.draft_cell = self.draft_cell.saturating_sub(1),
            KeyCode::Right => self.draft_cell = (self.draft_cell + 1).min(WORD_LENGTH - 1),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.session.submit_draft() {
            Ok(id) => {
                self.draft_cell = 0;
                self.history_attempt = id.0;
                let text = crate::output::formatters::outcome_summary(&self.session.outcome());
                self.add_message(
                    &format!("Attempt #{} added. {text}.", id.0 + 1),
                    MessageStyle::Success,
                );
            }
            Err(HelperError::IncompleteDraft { .. }) => {
                self.add_message("Enter all five letters first.", MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let count = self.session.attempts().len();
        match code {
            KeyCode::Up => self.history_attempt = self.history_attempt.saturating_sub(1),
            KeyCode::Down => {
                self.history_attempt = (self.history_attempt + 1).min(count.saturating_sub(1));
            }
            KeyCode::Left => self.history_cell = self.history_cell.saturating_sub(1),
            KeyCode::Right => self.history_cell = (self.history_cell + 1).min(WORD_LENGTH - 1),
            KeyCode::Char(c @ '1'..='5') => {
                let position = (c as usize) - ('1' as usize);
                self.refine(position);
            }
            _ => {}
        }
    }

    fn refine(&mut self, position: usize) {
        let Some((letter, label)) = self.selected_history_cell() else {
            return;
        };
        if label != Feedback::Present {
            self.add_message("Only yellow letters can be refined.", MessageStyle::Error);
            return;
        }
        if position == self.history_cell {
            self.add_message(
                "That position is already excluded by the yellow label.",
                MessageStyle::Info,
            );
            return;
        }

        let id = AttemptId(self.history_attempt);
        match self.session.toggle_refinement_at(id, letter, position) {
            Ok(excluded) => {
                let verb = if excluded { "not at" } else { "may be at" };
                self.add_message(
                    &format!(
                        "{} {verb} position {}.",
                        letter.to_uppercase(),
                        position + 1
                    ),
                    MessageStyle::Success,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
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
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
