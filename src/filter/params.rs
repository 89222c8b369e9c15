use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A single parameter failed validation. Caller error; the message
    /// names the offending field.
    #[error("Invalid query parameter \"{field}\" ({reason})")]
    InvalidParam {
        field: &'static str,
        reason: &'static str,
    },
    /// Both bounds are individually valid but jointly unsatisfiable.
    /// Reported distinctly from a malformed parameter.
    #[error("\"min_length\" cannot be greater than \"max_length\"")]
    ConflictingBounds { min: usize, max: usize },
}

/// The validated, typed set of filter fields. All present fields must
/// hold for a record to match (conjunction). Absent fields serialize to
/// nothing, so an echoed filter set names exactly what was applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl StringFilter {
    /// Parse raw query-parameter text into a typed filter set.
    ///
    /// Unknown parameter names are ignored. Each recognized field is
    /// validated independently, then the cross-field bounds check runs.
    pub fn from_params(params: &BTreeMap<String, String>) -> Result<Self, FilterError> {
        let mut filter = StringFilter::default();

        if let Some(raw) = params.get("is_palindrome") {
            filter.is_palindrome = Some(parse_bool_param(raw).ok_or(FilterError::InvalidParam {
                field: "is_palindrome",
                reason: "must be true or false",
            })?);
        }

        if let Some(raw) = params.get("min_length") {
            filter.min_length = Some(parse_count_param(raw, "min_length")?);
        }

        if let Some(raw) = params.get("max_length") {
            filter.max_length = Some(parse_count_param(raw, "max_length")?);
        }

        if let Some(raw) = params.get("word_count") {
            filter.word_count = Some(parse_count_param(raw, "word_count")?);
        }

        if let Some(raw) = params.get("contains_character") {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => filter.contains_character = Some(ch),
                _ => {
                    return Err(FilterError::InvalidParam {
                        field: "contains_character",
                        reason: "must be a single character",
                    })
                }
            }
        }

        filter.check_bounds()?;
        Ok(filter)
    }

    /// Cross-field validation: min_length must not exceed max_length.
    /// Also run against interpreter output, which bypasses `from_params`.
    pub fn check_bounds(&self) -> Result<(), FilterError> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(FilterError::ConflictingBounds { min, max });
            }
        }
        Ok(())
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self == &StringFilter::default()
    }
}

/// "true" / "false", case-insensitive; anything else is rejected.
fn parse_bool_param(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Non-negative integer; negative or non-numeric text is rejected.
fn parse_count_param(raw: &str, field: &'static str) -> Result<usize, FilterError> {
    raw.trim().parse::<usize>().map_err(|_| FilterError::InvalidParam {
        field,
        reason: "must be non-negative integer",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn bool_param_is_case_insensitive() {
        let filter = StringFilter::from_params(&params(&[("is_palindrome", "TRUE")])).unwrap();
        assert_eq!(filter.is_palindrome, Some(true));

        let err = StringFilter::from_params(&params(&[("is_palindrome", "yes")])).unwrap_err();
        assert!(matches!(err, FilterError::InvalidParam { field: "is_palindrome", .. }));
    }

    #[test]
    fn negative_length_is_rejected() {
        let err = StringFilter::from_params(&params(&[("min_length", "-3")])).unwrap_err();
        assert!(matches!(err, FilterError::InvalidParam { field: "min_length", .. }));
    }

    #[test]
    fn contains_character_must_be_single_char() {
        let err = StringFilter::from_params(&params(&[("contains_character", "ab")])).unwrap_err();
        assert!(matches!(err, FilterError::InvalidParam { field: "contains_character", .. }));

        // A multi-byte char is still one character
        let filter = StringFilter::from_params(&params(&[("contains_character", "é")])).unwrap();
        assert_eq!(filter.contains_character, Some('é'));
    }

    #[test]
    fn conflicting_bounds_are_a_distinct_error() {
        let err = StringFilter::from_params(&params(&[("min_length", "10"), ("max_length", "5")]))
            .unwrap_err();
        assert_eq!(err, FilterError::ConflictingBounds { min: 10, max: 5 });
    }

    #[test]
    fn unknown_params_are_ignored() {
        let filter = StringFilter::from_params(&params(&[("sort", "asc")])).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn echo_serializes_only_set_fields() {
        let filter = StringFilter {
            min_length: Some(3),
            ..Default::default()
        };
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(json, r#"{"min_length":3}"#);
    }
}
