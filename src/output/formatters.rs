//! Formatting utilities for terminal output

use crate::session::FilterOutcome;
use std::collections::BTreeSet;

/// Split a candidate list into the shown prefix and the hidden remainder count
#[must_use]
pub fn truncate_list<T>(items: &[T], limit: usize) -> (&[T], usize) {
    let shown = items.len().min(limit);
    (&items[..shown], items.len() - shown)
}

/// Positions as a 1-based, comma separated list
#[must_use]
pub fn positions_1based(positions: &BTreeSet<usize>) -> String {
    positions
        .iter()
        .map(|p| (p + 1).to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// One-line description of a filter outcome
#[must_use]
pub fn outcome_summary(outcome: &FilterOutcome<'_>) -> String {
    match outcome {
        FilterOutcome::NoAttempts => "No guesses entered yet".to_string(),
        FilterOutcome::NoMatches => "No words match the entered feedback".to_string(),
        FilterOutcome::Matches(words) if words.len() == 1 => "1 matching word".to_string(),
        FilterOutcome::Matches(words) => format!("{} matching words", words.len()),
    }
}

/// Candidate words joined for display, with a "+N more" tail when truncated
#[must_use]
pub fn candidate_line(words: &[&crate::core::Word], limit: usize) -> String {
    let (shown, hidden) = truncate_list(words, limit);
    let mut line = shown
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(" ");
    if hidden > 0 {
        line.push_str(&format!(" +{hidden} more"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn truncate_under_limit() {
        let items = [1, 2, 3];
        assert_eq!(truncate_list(&items, 5), (&items[..], 0));
    }

    #[test]
    fn truncate_over_limit() {
        let items = [1, 2, 3, 4];
        assert_eq!(truncate_list(&items, 3), (&items[..3], 1));
        assert_eq!(truncate_list(&items, 0), (&items[..0], 4));
    }

    #[test]
    fn positions_shown_from_one() {
        assert_eq!(positions_1based(&BTreeSet::from([0, 3])), "1,4");
        assert_eq!(positions_1based(&BTreeSet::new()), "");
    }

    #[test]
    fn summaries_distinguish_empty_cases() {
        let word = Word::new("столб").unwrap();
        assert_eq!(
            outcome_summary(&FilterOutcome::NoAttempts),
            "No guesses entered yet"
        );
        assert_eq!(
            outcome_summary(&FilterOutcome::NoMatches),
            "No words match the entered feedback"
        );
        assert_eq!(
            outcome_summary(&FilterOutcome::Matches(vec![&word])),
            "1 matching word"
        );
    }

    #[test]
    fn candidate_line_reports_hidden_count() {
        let words: Vec<Word> = ["слива", "столб", "сушка"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let refs: Vec<&Word> = words.iter().collect();

        assert_eq!(candidate_line(&refs, 2), "СЛИВА СТОЛБ +1 more");
        assert_eq!(candidate_line(&refs, 100), "СЛИВА СТОЛБ СУШКА");
    }
}
