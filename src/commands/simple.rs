//! Simple interactive CLI mode
//!
//! Line-oriented helper without the TUI. The session is persisted after
//! every change, so quitting and restarting keeps the log.

use super::filter::{parse_guess, parse_letter, parse_position};
use crate::core::{Attempt, pattern_to_emoji};
use crate::engine::{AttemptId, AttemptSelector};
use crate::error::{HelperError, Result};
use crate::output::{print_outcome, print_session};
use crate::session::Session;
use colored::Colorize;
use std::io::{self, Write};

/// How a `refine` command names its attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptRef {
    /// `#n`, 1-based
    Number(usize),
    Word(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Add(Attempt),
    Refine {
        target: AttemptRef,
        letter: char,
        position: usize,
    },
    Show,
    Reset,
    Help,
    Quit,
}

/// Parse one input line
///
/// # Errors
///
/// Returns `HelperError::InvalidCommand` for unknown commands or wrong
/// arguments, and word or pattern errors from `add`.
pub fn parse_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = parts.split_first() else {
        return Err(HelperError::InvalidCommand("empty command".to_string()));
    };

    match (name.to_lowercase().as_str(), args) {
        ("add" | "a", [word, pattern]) => Ok(ReplCommand::Add(parse_guess(&format!(
            "{word}={pattern}"
        ))?)),
        ("refine" | "r", [target, letter, position]) => Ok(ReplCommand::Refine {
            target: parse_target(target)?,
            letter: parse_letter(letter)?,
            position: parse_position(position)?,
        }),
        ("show" | "s", []) => Ok(ReplCommand::Show),
        ("reset", []) => Ok(ReplCommand::Reset),
        ("help" | "h" | "?", []) => Ok(ReplCommand::Help),
        ("quit" | "q" | "exit", []) => Ok(ReplCommand::Quit),
        (other, _) => Err(HelperError::InvalidCommand(format!(
            "cannot understand '{other}' with {} argument(s), type 'help'",
            args.len()
        ))),
    }
}

fn parse_target(text: &str) -> Result<AttemptRef> {
    if let Some(number) = text.strip_prefix('#') {
        return match number.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(AttemptRef::Number(n)),
            _ => Err(HelperError::InvalidCommand(format!(
                "attempt number must be #1 or higher, got '{text}'"
            ))),
        };
    }
    Ok(AttemptRef::Word(text.to_lowercase()))
}

fn print_help() {
    println!("Commands:");
    println!("  add <word> <pattern>             record a guess, e.g. 'add слива G-Y--'");
    println!("  refine <word|#n> <letter> <pos>  toggle a position (1-5) the letter is not at");
    println!("  show                             print attempts, constraints and candidates");
    println!("  reset                            forget all attempts");
    println!("  quit");
    println!("\nPattern symbols: G/g/🟩 correct, Y/y/🟨 present, -/_/. absent");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(session: &mut Session) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Helper - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    if !session.attempts().is_empty() {
        print_session(session);
    }

    loop {
        let Some(line) = get_user_input(">")? else {
            println!();
            return Ok(());
        };
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{} {e}", "✗".red());
                continue;
            }
        };

        match command {
            ReplCommand::Quit => return Ok(()),
            ReplCommand::Help => print_help(),
            ReplCommand::Show => print_session(session),
            ReplCommand::Reset => {
                let answer = get_user_input("Reset all attempts? (yes/no)")?.unwrap_or_default();
                if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                    session.reset();
                    println!("{}", "Cleared.".green());
                }
            }
            ReplCommand::Add(attempt) => {
                let tiles = pattern_to_emoji(attempt.labels());
                let id = session.add_attempt(attempt);
                println!("{} attempt #{} {tiles}", "✓".green(), id.0 + 1);
                print_outcome(&session.outcome(), session.settings().display_limit);
            }
            ReplCommand::Refine {
                target,
                letter,
                position,
            } => {
                let result = match target {
                    AttemptRef::Number(n) => {
                        session.toggle_refinement_at(AttemptId(n - 1), letter, position)
                    }
                    AttemptRef::Word(word) => session.toggle_refinement(
                        AttemptSelector::FirstWithWord(&word),
                        letter,
                        position,
                    ),
                };
                match result {
                    Ok(excluded) => {
                        let verb = if excluded { "not at" } else { "may be at" };
                        println!(
                            "{} {} {verb} position {}",
                            "✓".green(),
                            letter.to_uppercase(),
                            position + 1
                        );
                        print_outcome(&session.outcome(), session.settings().display_limit);
                    }
                    Err(e @ (HelperError::UnknownAttempt(_) | HelperError::InvalidPosition(_))) => {
                        println!("{} {e}", "✗".red());
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt} ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add() {
        let ReplCommand::Add(attempt) = parse_command("add СЛИВА G-Y--").unwrap() else {
            panic!("expected add");
        };
        assert_eq!(attempt.word().text(), "слива");
    }

    #[test]
    fn parse_refine_targets() {
        assert_eq!(
            parse_command("refine #2 о 5").unwrap(),
            ReplCommand::Refine {
                target: AttemptRef::Number(2),
                letter: 'о',
                position: 4,
            }
        );
        assert_eq!(
            parse_command("r Столб О 1").unwrap(),
            ReplCommand::Refine {
                target: AttemptRef::Word("столб".to_string()),
                letter: 'о',
                position: 0,
            }
        );
        assert!(parse_command("refine #0 о 1").is_err());
        assert!(parse_command("refine столб о 9").is_err());
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("show").unwrap(), ReplCommand::Show);
        assert_eq!(parse_command("RESET").unwrap(), ReplCommand::Reset);
        assert_eq!(parse_command("q").unwrap(), ReplCommand::Quit);
        assert_eq!(parse_command("?").unwrap(), ReplCommand::Help);
    }

    #[test]
    fn parse_rejects_unknown_and_wrong_arity() {
        assert!(matches!(parse_command("solve слива"), Err(HelperError::InvalidCommand(_))));
        assert!(matches!(parse_command("add слива"), Err(HelperError::InvalidCommand(_))));
        assert!(matches!(parse_command("add слива G-Y"), Err(HelperError::InvalidPattern(_))));
        assert!(parse_command("   ").is_err());
    }
}
