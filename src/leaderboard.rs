//! Leaderboard construction over a computed score table.
//!
//! Both leaderboard variants share one ranking rule: score descending,
//! then word ascending. The comparator is an explicit total order, so the
//! output never depends on hash-map iteration order.

use crate::score::ScoreTable;
use std::cmp::Ordering;
use std::collections::HashMap;

/// A single ranked entry: a word and its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub word: String,
    pub score: u32,
}

impl LeaderboardEntry {
    pub fn new(word: impl Into<String>, score: u32) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}

/// Ranking rule shared by every leaderboard: score descending, ties broken
/// by word ascending.
pub fn rank(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word))
}

/// Build the whole-dictionary leaderboard.
///
/// Words shorter than `min_word_length` characters are dropped before
/// ranking; the result is truncated to `max_length` entries.
pub fn build_for_word_list(
    scores: &ScoreTable,
    min_word_length: usize,
    max_length: usize,
) -> Vec<LeaderboardEntry> {
    let entries = scores
        .iter()
        .filter(|(word, _)| word.chars().count() >= min_word_length)
        .map(|(word, &score)| LeaderboardEntry::new(word.clone(), score));
    sort_and_truncate(entries.collect(), max_length)
}

/// Build the leaderboard of words constructible from a letter pool.
///
/// The pool is a multiset: a word needing two of a letter is rejected if
/// the pool holds only one. No minimum-length filter applies here, so
/// short dictionary words are admitted whenever the pool covers them.
pub fn build_for_letters(
    scores: &ScoreTable,
    letters: &str,
    max_length: usize,
) -> Vec<LeaderboardEntry> {
    let pool = letter_counts(letters);
    let entries = scores
        .iter()
        .filter(|(word, _)| is_constructible(word, &pool))
        .map(|(word, &score)| LeaderboardEntry::new(word.clone(), score));
    sort_and_truncate(entries.collect(), max_length)
}

/// Count each letter in a string, case-insensitively.
pub fn letter_counts(s: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in s.chars().flat_map(|c| c.to_lowercase()) {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Check whether a word can be assembled from the pool without using any
/// letter more times than the pool provides it.
pub fn is_constructible(word: &str, pool: &HashMap<char, usize>) -> bool {
    letter_counts(word)
        .iter()
        .all(|(c, &needed)| pool.get(c).copied().unwrap_or(0) >= needed)
}

fn sort_and_truncate(
    mut entries: Vec<LeaderboardEntry>,
    max_length: usize,
) -> Vec<LeaderboardEntry> {
    entries.sort_by(rank);
    entries.truncate(max_length);
    entries
}
