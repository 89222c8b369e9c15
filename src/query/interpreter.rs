use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::StringFilter;

/// The outcome of translating a free-text query, kept alongside the
/// original text for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: StringFilter,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unable to parse natural language query")]
    Unparseable,
    /// The query parsed, but its filters are jointly unsatisfiable.
    /// Carries the partial interpretation so callers can show what was
    /// understood.
    #[error("Query parsed but resulted in conflicting filters")]
    ConflictingFilters { interpreted: InterpretedQuery },
}

fn longer_than_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"longer than (\d+)").expect("hard-coded pattern"))
}

fn shorter_than_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"shorter than (\d+)").expect("hard-coded pattern"))
}

fn letter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"letter\s+([a-z0-9])").expect("hard-coded pattern"))
}

/// Translate a free-text query into a structured filter set.
///
/// A fixed, ordered set of heuristic rules runs against the case-folded
/// text; every rule that fires contributes a field. Precedence matters
/// only where rules overlap: the explicit "letter X" rule beats the
/// "first vowel" fallback, which never overwrites an already-set
/// character. This is a best-effort translator, not a grammar.
///
/// Supported phrasings:
/// - "single word" / "single-word" -> word_count = 1
/// - "palindrom..." -> is_palindrome = true
/// - "longer than N" -> min_length = N + 1 (strict lower bound)
/// - "shorter than N" -> max_length = N - 1, floored at 0
/// - "letter X" (single alphanumeric) -> contains_character = X
/// - "first vowel" -> contains_character = 'a'
pub fn interpret(text: &str) -> Result<InterpretedQuery, QueryError> {
    let folded = text.to_lowercase();
    let mut parsed = StringFilter::default();

    if folded.contains("single word") || folded.contains("single-word") {
        parsed.word_count = Some(1);
    }

    if folded.contains("palindrom") {
        parsed.is_palindrome = Some(true);
    }

    if let Some(caps) = longer_than_re().captures(&folded) {
        if let Ok(n) = caps[1].parse::<usize>() {
            parsed.min_length = Some(n + 1);
        }
    }

    if let Some(caps) = shorter_than_re().captures(&folded) {
        if let Ok(n) = caps[1].parse::<usize>() {
            parsed.max_length = Some(n.saturating_sub(1));
        }
    }

    if let Some(caps) = letter_re().captures(&folded) {
        // Single [a-z0-9] capture, always one char
        parsed.contains_character = caps[1].chars().next();
    }

    if folded.contains("first vowel") && parsed.contains_character.is_none() {
        parsed.contains_character = Some('a');
    }

    if parsed.is_empty() {
        return Err(QueryError::Unparseable);
    }

    let interpreted = InterpretedQuery {
        original: text.to_string(),
        parsed_filters: parsed,
    };

    if interpreted.parsed_filters.check_bounds().is_err() {
        return Err(QueryError::ConflictingFilters { interpreted });
    }

    Ok(interpreted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longer_than_is_a_strict_bound() {
        let q = interpret("strings longer than 10 characters").unwrap();
        assert_eq!(q.parsed_filters.min_length, Some(11));
    }

    #[test]
    fn shorter_than_floors_at_zero() {
        let q = interpret("strings shorter than 0 characters").unwrap();
        assert_eq!(q.parsed_filters.max_length, Some(0));
    }

    #[test]
    fn rules_compose() {
        let q = interpret("all single word palindromic strings").unwrap();
        assert_eq!(q.parsed_filters.word_count, Some(1));
        assert_eq!(q.parsed_filters.is_palindrome, Some(true));
    }

    #[test]
    fn explicit_letter_beats_first_vowel() {
        let q = interpret("strings containing the letter z and the first vowel").unwrap();
        assert_eq!(q.parsed_filters.contains_character, Some('z'));

        let q = interpret("palindromic strings that contain the first vowel").unwrap();
        assert_eq!(q.parsed_filters.contains_character, Some('a'));
    }

    #[test]
    fn unmatched_text_is_unparseable() {
        assert_eq!(interpret("show me everything").unwrap_err(), QueryError::Unparseable);
        assert_eq!(interpret("").unwrap_err(), QueryError::Unparseable);
    }

    #[test]
    fn conflicting_bounds_keep_the_interpretation() {
        let err = interpret("strings longer than 10 and shorter than 5").unwrap_err();
        match err {
            QueryError::ConflictingFilters { interpreted } => {
                assert_eq!(interpreted.parsed_filters.min_length, Some(11));
                assert_eq!(interpreted.parsed_filters.max_length, Some(4));
                assert_eq!(interpreted.original, "strings longer than 10 and shorter than 5");
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn folding_is_applied_before_matching() {
        let q = interpret("Strings LONGER THAN 3").unwrap();
        assert_eq!(q.parsed_filters.min_length, Some(4));
        // Original text is preserved unfolded
        assert_eq!(q.original, "Strings LONGER THAN 3");
    }
}
