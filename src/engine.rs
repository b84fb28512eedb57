//! The score engine: owns the word list, the letter-value table, and the
//! cached score table, and exposes the leaderboard operations.
//!
//! Every instance exclusively owns its data; nothing is shared across
//! instances. The score table starts absent and is computed on first use
//! or by an explicit [`ScoreEngine::compute_word_scores`] call. Recomputes
//! replace the table wholesale, and the `&mut self` receiver guarantees a
//! caller can never observe a partially built table.

use crate::error::EngineError;
use crate::leaderboard::{self, LeaderboardEntry};
use crate::score::{self, LetterValues, ScoreTable};
use crate::{load_letter_values, load_word_list};
use std::path::Path;

/// Leaderboard limits, adjustable per engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of entries in any leaderboard.
    pub max_leaderboard_length: usize,
    /// Minimum word length for the whole-dictionary leaderboard.
    pub min_word_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_leaderboard_length: crate::MAX_LEADERBOARD_LENGTH,
            min_word_length: crate::MIN_WORD_LENGTH,
        }
    }
}

/// Scores dictionary words and builds leaderboards from them.
pub struct ScoreEngine {
    words: Vec<String>,
    letter_values: LetterValues,
    limits: Limits,
    word_scores: Option<ScoreTable>,
}

impl ScoreEngine {
    /// Create an engine from an already-loaded word list and letter-value
    /// table, with default limits.
    pub fn new(words: Vec<String>, letter_values: LetterValues) -> Self {
        Self {
            words,
            letter_values,
            limits: Limits::default(),
            word_scores: None,
        }
    }

    /// Create an engine by loading both resources from disk.
    ///
    /// A missing or unreadable resource, or a malformed letter-value
    /// entry, aborts construction with the corresponding error.
    pub fn from_files(
        words_path: impl AsRef<Path>,
        values_path: impl AsRef<Path>,
    ) -> Result<Self, EngineError> {
        let words = load_word_list(words_path)?;
        let letter_values = load_letter_values(values_path)?;
        Ok(Self::new(words, letter_values))
    }

    pub fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn letter_values(&self) -> &LetterValues {
        &self.letter_values
    }

    pub fn letter_value_count(&self) -> usize {
        self.letter_values.len()
    }

    /// Compute scores for every word and replace the cached table.
    pub fn compute_word_scores(&mut self) -> &ScoreTable {
        let scores = score::compute_scores(&self.words, &self.letter_values);
        tracing::info!("Computed scores for {} words", scores.len());
        self.word_scores.insert(scores)
    }

    /// The cached score table, if it has been computed.
    pub fn word_scores(&self) -> Option<&ScoreTable> {
        self.word_scores.as_ref()
    }

    /// Top words from the whole dictionary, at least
    /// `min_word_length` characters long, ranked by score then word.
    pub fn build_leaderboard_for_word_list(&mut self) -> Vec<LeaderboardEntry> {
        let limits = self.limits;
        let scores = self.ensure_scores();
        let board = leaderboard::build_for_word_list(
            scores,
            limits.min_word_length,
            limits.max_leaderboard_length,
        );
        tracing::debug!("Built word-list leaderboard with {} entries", board.len());
        board
    }

    /// Top words constructible from the given letters, ranked by score
    /// then word. Short words are admitted here; only the
    /// whole-dictionary leaderboard applies the length filter.
    pub fn build_leaderboard_for_letters(&mut self, letters: &str) -> Vec<LeaderboardEntry> {
        let limits = self.limits;
        let scores = self.ensure_scores();
        let board = leaderboard::build_for_letters(scores, letters, limits.max_leaderboard_length);
        tracing::debug!(
            "Built leaderboard for letters {:?} with {} entries",
            letters,
            board.len()
        );
        board
    }

    fn ensure_scores(&mut self) -> &ScoreTable {
        self.word_scores.get_or_insert_with(|| {
            let scores = score::compute_scores(&self.words, &self.letter_values);
            tracing::info!("Computed scores for {} words", scores.len());
            scores
        })
    }
}
