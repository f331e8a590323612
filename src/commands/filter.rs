//! One-shot filtering from command-line arguments
//!
//! Guesses are given as `WORD=PATTERN` and refinements as
//! `WORD:LETTER:POSITION` with 1-based positions. Nothing is persisted.

use crate::config::Settings;
use crate::core::{Attempt, Word, parse_pattern};
use crate::engine::AttemptSelector;
use crate::error::{HelperError, Result};
use crate::output::print_session;
use crate::session::Session;

/// A refinement parsed from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementArg {
    pub word: String,
    pub letter: char,
    /// 0-based
    pub position: usize,
}

/// Parse `WORD=PATTERN`
///
/// # Errors
///
/// Returns an error if the separator is missing or either half is invalid.
pub fn parse_guess(arg: &str) -> Result<Attempt> {
    let (word, pattern) = arg
        .split_once('=')
        .ok_or_else(|| HelperError::InvalidCommand(format!("expected WORD=PATTERN, got '{arg}'")))?;
    Ok(Attempt::new(Word::new(word)?, parse_pattern(pattern.trim())?))
}

/// Parse a 1-based position into a 0-based index
///
/// # Errors
///
/// Returns an error unless the text is a number from 1 to 5.
pub fn parse_position(text: &str) -> Result<usize> {
    match text.trim().parse::<usize>() {
        Ok(n @ 1..=5) => Ok(n - 1),
        _ => Err(HelperError::InvalidCommand(format!(
            "position must be 1-5, got '{text}'"
        ))),
    }
}

/// Parse a single letter
///
/// # Errors
///
/// Returns an error unless the text is exactly one alphabetic character.
pub fn parse_letter(text: &str) -> Result<char> {
    let mut chars = text.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_alphabetic() => {
            Ok(letter.to_lowercase().next().unwrap_or(letter))
        }
        _ => Err(HelperError::InvalidCommand(format!(
            "expected a single letter, got '{text}'"
        ))),
    }
}

/// Parse `WORD:LETTER:POSITION`
///
/// # Errors
///
/// Returns an error if the argument does not have three valid parts.
pub fn parse_refinement(arg: &str) -> Result<RefinementArg> {
    let parts: Vec<&str> = arg.split(':').collect();
    let [word, letter, position] = parts.as_slice() else {
        return Err(HelperError::InvalidCommand(format!(
            "expected WORD:LETTER:POSITION, got '{arg}'"
        )));
    };
    Ok(RefinementArg {
        word: Word::new(*word)?.text().to_string(),
        letter: parse_letter(letter)?,
        position: parse_position(position)?,
    })
}

/// Build a throwaway session from arguments
///
/// # Errors
///
/// Returns the first parse or refinement error.
pub fn build_session(
    dictionary: Vec<Word>,
    settings: Settings,
    guesses: &[String],
    refinements: &[String],
) -> Result<Session> {
    let mut session = Session::ephemeral(dictionary, settings);
    for guess in guesses {
        session.add_attempt(parse_guess(guess)?);
    }
    for refinement in refinements {
        let RefinementArg {
            word,
            letter,
            position,
        } = parse_refinement(refinement)?;
        session.toggle_refinement(AttemptSelector::FirstWithWord(&word), letter, position)?;
    }
    Ok(session)
}

/// Run the `filter` command
///
/// # Errors
///
/// Returns an error if any argument is malformed.
pub fn run_filter(
    dictionary: Vec<Word>,
    settings: Settings,
    guesses: &[String],
    refinements: &[String],
) -> Result<()> {
    let session = build_session(dictionary, settings, guesses, refinements)?;
    print_session(&session);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::session::FilterOutcome;
    use crate::wordlists::loader::words_from_slice;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn guess_argument() {
        let attempt = parse_guess("СЛИВА=G-y--").unwrap();
        assert_eq!(attempt.word().text(), "слива");
        assert_eq!(attempt.labels()[0], Feedback::Correct);
        assert_eq!(attempt.labels()[2], Feedback::Present);

        assert!(matches!(
            parse_guess("слива"),
            Err(HelperError::InvalidCommand(_))
        ));
        assert!(matches!(
            parse_guess("слива=G--"),
            Err(HelperError::InvalidPattern(_))
        ));
        assert!(matches!(
            parse_guess("шкаф=G----"),
            Err(HelperError::InvalidWord(_))
        ));
    }

    #[test]
    fn refinement_argument_is_one_based() {
        assert_eq!(
            parse_refinement("столб:О:5").unwrap(),
            RefinementArg {
                word: "столб".to_string(),
                letter: 'о',
                position: 4,
            }
        );
        assert!(parse_refinement("столб:о:0").is_err());
        assert!(parse_refinement("столб:о:6").is_err());
        assert!(parse_refinement("столб:ол:1").is_err());
        assert!(parse_refinement("столб:о").is_err());
    }

    #[test]
    fn session_from_arguments() {
        let session = build_session(
            words_from_slice(&["окунь", "радио"]),
            Settings::default(),
            &args(&["столб=--Y--"]),
            &args(&["столб:о:5"]),
        )
        .unwrap();

        match session.outcome() {
            FilterOutcome::Matches(words) => {
                assert_eq!(words.len(), 1);
                assert_eq!(words[0].text(), "окунь");
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn refinement_for_missing_guess_fails() {
        let result = build_session(
            Vec::new(),
            Settings::default(),
            &args(&["столб=--Y--"]),
            &args(&["сушка:о:1"]),
        );
        assert!(matches!(result, Err(HelperError::UnknownAttempt(_))));
    }
}
