//! Score computation for dictionary words.
//!
//! A word's score is the sum of the values of its letters, looked up in a
//! letter-value table. Lookups are case-insensitive: both the word and the
//! table keys are normalized to lowercase. Letters with no entry in the
//! table contribute zero, so scoring never fails.

use std::collections::HashMap;

/// Per-letter score values, keyed by lowercase letter.
pub type LetterValues = HashMap<char, u32>;

/// Computed scores, one entry per distinct word.
pub type ScoreTable = HashMap<String, u32>;

/// Score a single word against the letter-value table.
pub fn word_score(word: &str, letter_values: &LetterValues) -> u32 {
    word.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| letter_values.get(&c).copied().unwrap_or(0))
        .sum()
}

/// Compute scores for every word in the list.
///
/// Duplicate words collapse to a single entry; the computation is pure, so
/// every occurrence produces the same score anyway.
pub fn compute_scores(words: &[String], letter_values: &LetterValues) -> ScoreTable {
    words
        .iter()
        .map(|word| (word.clone(), word_score(word, letter_values)))
        .collect()
}
