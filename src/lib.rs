//! # Word Leaderboard
//!
//! Scores words from a fixed dictionary against a letter-value table and
//! ranks them into two kinds of leaderboards: the top-scoring words in the
//! whole dictionary, and the top-scoring words constructible from a given
//! multiset of letters.
//!
//! Ranking is always score descending with ties broken alphabetically, and
//! leaderboards are capped at [`MAX_LEADERBOARD_LENGTH`] entries.

pub mod engine;
pub mod error;
pub mod leaderboard;
pub mod score;

pub use engine::{Limits, ScoreEngine};
pub use error::EngineError;
pub use leaderboard::LeaderboardEntry;

use score::LetterValues;
use std::fs;
use std::path::Path;

/// Maximum number of entries in a leaderboard
pub const MAX_LEADERBOARD_LENGTH: usize = 100;

/// Minimum word length for the whole-dictionary leaderboard
pub const MIN_WORD_LENGTH: usize = 3;

/// Load a word list: one word per line, order preserved, blank lines
/// skipped.
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<String>, EngineError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| EngineError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    tracing::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load a letter-value table: lines of `letter:integer`, keys trimmed and
/// lowercased. Any line that does not parse is a fatal error; a corrupt
/// table must not produce silently wrong scores.
pub fn load_letter_values(path: impl AsRef<Path>) -> Result<LetterValues, EngineError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| EngineError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut values = LetterValues::new();
    for (idx, raw) in contents.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        match parse_letter_entry(raw) {
            Some((letter, value)) => {
                values.insert(letter, value);
            }
            None => {
                return Err(EngineError::MalformedLetterEntry {
                    path: path.to_path_buf(),
                    line_no: idx + 1,
                    line: raw.to_string(),
                })
            }
        }
    }

    tracing::info!(
        "Loaded letter values for {} letters from {}",
        values.len(),
        path.display()
    );
    Ok(values)
}

fn parse_letter_entry(line: &str) -> Option<(char, u32)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim().to_lowercase();
    let mut chars = key.chars();
    let letter = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let value: u32 = value.trim().parse().ok()?;
    Some((letter, value))
}
