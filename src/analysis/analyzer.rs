use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::StringId;

/// Descriptive properties of a string value.
///
/// Fully determined by the value and never recomputed after a record is
/// created. Field order matches the wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: StringId,
    /// Occurrence count per character, exactly as each appears in the value.
    /// BTreeMap so serialization order is deterministic.
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// Compute the full property set for a value. Pure and total.
///
/// Semantics:
/// - `length` counts chars of the raw, untrimmed value.
/// - The palindrome check folds case but strips nothing; spaces and
///   punctuation are compared literally against the reverse.
/// - `word_count` trims, then splits on whitespace runs; an empty or
///   all-whitespace value has 0 words.
/// - `unique_characters` and the frequency map are case-sensitive and
///   computed over the raw value.
pub fn analyze(value: &str) -> Properties {
    let length = value.chars().count();

    let lowered = value.to_lowercase();
    let is_palindrome = lowered.chars().eq(lowered.chars().rev());

    let mut character_frequency_map = BTreeMap::new();
    for ch in value.chars() {
        *character_frequency_map.entry(ch).or_insert(0) += 1;
    }
    let unique_characters = character_frequency_map.len();

    let word_count = value.trim().split_whitespace().count();

    Properties {
        length,
        is_palindrome,
        unique_characters,
        word_count,
        sha256_hash: StringId::from_value(value),
        character_frequency_map,
    }
}
