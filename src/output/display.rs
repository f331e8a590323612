//! Colored line-mode output

use super::formatters::{candidate_line, outcome_summary, positions_1based};
use crate::core::{Attempt, Feedback};
use crate::engine::ConstraintSet;
use crate::session::{FilterOutcome, Session};
use colored::{ColoredString, Colorize};
use std::collections::BTreeMap;

fn tile(letter: char, label: Feedback) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match label {
        Feedback::Correct => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black(),
    }
}

/// Print one attempt as colored tiles, with its refinements
pub fn print_attempt(number: usize, attempt: &Attempt) {
    let tiles: String = attempt
        .cells()
        .map(|(_, letter, label)| tile(letter, label).to_string())
        .collect();
    let mut line = format!("  {}. {tiles}", number.to_string().bright_black());

    for (letter, positions) in attempt.refinements() {
        line.push_str(&format!(
            "  {}",
            format!("{}≠{}", letter.to_uppercase(), positions_1based(positions)).yellow()
        ));
    }
    println!("{line}");
}

/// Print every attempt in log order
pub fn print_attempts(attempts: &[Attempt]) {
    if attempts.is_empty() {
        println!("  {}", "(no attempts)".bright_black());
        return;
    }
    for (i, attempt) in attempts.iter().enumerate() {
        print_attempt(i + 1, attempt);
    }
}

/// Print the derived constraint set
pub fn print_constraints(constraints: &ConstraintSet) {
    if constraints.is_empty() {
        return;
    }

    let exact: String = constraints
        .exact()
        .iter()
        .map(|(&pos, &letter)| format!("{}@{} ", letter.to_uppercase(), pos + 1))
        .collect();
    let present: String = constraints
        .present_sorted()
        .into_iter()
        .map(|(letter, excluded)| {
            format!("{}≠{} ", letter.to_uppercase(), positions_1based(excluded))
        })
        .collect();
    let absent: String = constraints
        .absent_sorted()
        .into_iter()
        .flat_map(char::to_uppercase)
        .collect();

    println!("  {} {}", "Exact:  ".bright_cyan(), exact.green().bold());
    println!("  {} {}", "Present:".bright_cyan(), present.yellow().bold());
    println!("  {} {}", "Absent: ".bright_cyan(), absent.bright_black());
}

/// Print the candidate list, capped at `limit` words
pub fn print_outcome(outcome: &FilterOutcome<'_>, limit: usize) {
    let summary = outcome_summary(outcome);
    match outcome {
        FilterOutcome::NoAttempts => println!("\n{}", summary.bright_black()),
        FilterOutcome::NoMatches => {
            println!("\n{}", summary.red().bold());
            println!("{}", "Check the labels of the entered attempts.".bright_black());
        }
        FilterOutcome::Matches(words) => {
            println!("\n{}", summary.bright_cyan().bold());
            println!("  {}", candidate_line(words, limit));
        }
    }
}

/// Print letters grouped by their best label
pub fn print_keyboard(states: &BTreeMap<char, Feedback>) {
    if states.is_empty() {
        return;
    }
    let letters: String = states
        .iter()
        .map(|(&letter, &label)| tile(letter, label).to_string())
        .collect();
    println!("  {letters}");
}

/// Print the whole session: attempts, constraints and candidates
pub fn print_session(session: &Session) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Attempts".bright_cyan().bold());
    print_attempts(session.attempts());
    print_keyboard(&session.letter_states());
    print_constraints(session.constraints());
    print_outcome(&session.outcome(), session.settings().display_limit);
    println!("{}", "─".repeat(60).cyan());
}
