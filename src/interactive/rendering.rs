//! TUI rendering with ratatui
//!
//! Draft grid, attempt history, keyboard summary and candidate list.

use super::app::{App, Focus, InputMode, MessageStyle};
use crate::core::{Feedback, WORD_LENGTH};
use crate::engine::AttemptId;
use crate::output::formatters::{candidate_line, outcome_summary, positions_1based};
use crate::session::FilterOutcome;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["йцукенгшщзхъ", "фывапролджэ", "ячсмитьбю"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_left_panel(f, app, main_chunks[0]);
    render_right_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    if app.input_mode == InputMode::ConfirmReset {
        render_confirm(f);
    }
}

fn tile_style(label: Feedback) -> Style {
    let style = match label {
        Feedback::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Feedback::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Feedback::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    };
    style.add_modifier(Modifier::BOLD)
}

fn tile(letter: char, label: Feedback, selected: bool) -> Span<'static> {
    let text = format!(" {} ", letter.to_uppercase());
    let style = tile_style(label);
    if selected {
        Span::styled(text, style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED))
    } else {
        Span::styled(text, style)
    }
}

fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Cyan } else { Color::Gray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Double
        } else {
            BorderType::Rounded
        })
        .style(Style::default().fg(color))
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE HELPER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_left_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Draft
            Constraint::Min(5),    // History
            Constraint::Length(4), // Refinement picker
        ])
        .split(area);

    render_draft(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
    render_refinement_picker(f, app, chunks[2]);
}

fn render_draft(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Draft;
    let draft = app.session.draft();
    let tiles: Vec<Span> = (0..WORD_LENGTH)
        .flat_map(|i| {
            let selected = focused && i == app.draft_cell;
            let cell = match (draft.letter_at(i), draft.label_at(i)) {
                (Some(letter), Some(label)) => tile(letter, label, selected),
                _ if selected => Span::styled(" _ ", Style::default().fg(Color::Cyan)),
                _ => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            };
            [cell, Span::raw(" ")]
        })
        .collect();

    let paragraph = Paragraph::new(vec![Line::from(tiles)])
        .block(focus_block(" Current Guess ", focused));
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::History;
    let items: Vec<ListItem> = app
        .session
        .attempts()
        .iter()
        .enumerate()
        .map(|(i, attempt)| {
            let row_selected = focused && i == app.history_attempt;
            let mut spans = vec![Span::styled(
                format!("{:>2}. ", i + 1),
                Style::default().fg(Color::DarkGray),
            )];
            for (pos, letter, label) in attempt.cells() {
                spans.push(tile(letter, label, row_selected && pos == app.history_cell));
            }
            for (letter, positions) in attempt.refinements() {
                spans.push(Span::styled(
                    format!("  {}≠{}", letter.to_uppercase(), positions_1based(positions)),
                    Style::default().fg(Color::Yellow),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history = List::new(items).block(focus_block(" History (Tab) ", focused));
    f.render_widget(history, area);
}

fn render_refinement_picker(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Excluded Positions ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content = match (app.focus, app.selected_history_cell()) {
        (Focus::History, Some((letter, Feedback::Present))) => {
            let excluded = app
                .session
                .excluded_positions_at(AttemptId(app.history_attempt), letter);
            let mut spans = vec![Span::raw(format!("{} not at: ", letter.to_uppercase()))];
            for pos in 0..WORD_LENGTH {
                let style = if pos == app.history_cell {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else if excluded.contains(&pos) {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                spans.push(Span::styled(format!(" {} ", pos + 1), style));
            }
            Line::from(spans)
        }
        (Focus::History, Some(_)) => Line::from("Select a yellow letter to refine it."),
        _ => Line::from(Span::styled(
            "Tab to the history to refine yellow letters.",
            Style::default().fg(Color::DarkGray),
        )),
    };

    f.render_widget(Paragraph::new(content).block(block), area);
}

fn render_right_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Keyboard
            Constraint::Percentage(60), // Candidates
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let states = app.session.letter_states();
    let mut lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|letter| match states.get(&letter) {
                        Some(&label) => {
                            Span::styled(letter.to_uppercase().to_string(), tile_style(label))
                        }
                        None => Span::raw(letter.to_uppercase().to_string()),
                    })
                    .collect::<Vec<_>>(),
            )
            .alignment(Alignment::Center)
        })
        .collect();

    // Letters outside the layout, e.g. from a Latin dictionary
    let others: Vec<Span> = states
        .iter()
        .filter(|(letter, _)| !KEYBOARD_ROWS.iter().any(|row| row.contains(**letter)))
        .map(|(letter, &label)| Span::styled(letter.to_uppercase().to_string(), tile_style(label)))
        .collect();
    if !others.is_empty() {
        lines.push(Line::from(others).alignment(Alignment::Center));
    }

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let outcome = app.session.outcome();
    let summary = outcome_summary(&outcome);

    let content = match &outcome {
        FilterOutcome::NoAttempts => vec![Line::from(Span::styled(
            summary,
            Style::default().fg(Color::DarkGray),
        ))],
        FilterOutcome::NoMatches => vec![
            Line::from(Span::styled(summary, Style::default().fg(Color::Red))),
            Line::from("Check the colors of the entered attempts."),
        ],
        FilterOutcome::Matches(words) => {
            let text = candidate_line(words, app.session.settings().display_limit);
            vec![
                Line::from(Span::styled(
                    summary,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(text),
            ]
        }
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match (app.input_mode, app.focus) {
        (InputMode::ConfirmReset, _) => "y: confirm reset | n: cancel",
        (InputMode::Editing, Focus::Draft) => {
            "letters: type | ←/→: cell | Space: color | Enter: add | Tab: history | Ctrl+R: reset | Esc: quit"
        }
        (InputMode::Editing, Focus::History) => {
            "↑/↓: attempt | ←/→: cell | 1-5: toggle position | Tab: back | Esc: quit"
        }
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}

fn render_confirm(f: &mut Frame) {
    let area = centered(f.area(), 44, 5);
    let dialog = Paragraph::new(vec![
        Line::from("Clear all attempts and saved state?"),
        Line::from(Span::styled(
            "y = yes    n = no",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Reset ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Red)),
    );
    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
