use std::collections::HashMap;
use word_leaderboard::score::{compute_scores, word_score, LetterValues};

fn test_letter_values() -> LetterValues {
    [('a', 1), ('b', 3), ('c', 3), ('d', 2), ('e', 1)]
        .into_iter()
        .collect()
}

fn test_words() -> Vec<String> {
    vec![
        "aa".to_string(),
        "bb".to_string(),
        "cab".to_string(),
        "bad".to_string(),
        "ace".to_string(),
    ]
}

#[test]
fn test_word_score_sums_letter_values() {
    let values = test_letter_values();

    assert_eq!(word_score("cab", &values), 7);
    assert_eq!(word_score("bad", &values), 6);
    assert_eq!(word_score("ace", &values), 5);
}

#[test]
fn test_word_score_missing_letters_count_zero() {
    let values = test_letter_values();

    assert_eq!(word_score("fee", &values), 2);
    assert_eq!(word_score("xyz", &values), 0);
    assert_eq!(word_score("", &values), 0);
}

#[test]
fn test_word_score_is_case_insensitive() {
    let values = test_letter_values();

    assert_eq!(word_score("CAB", &values), word_score("cab", &values));
    assert_eq!(word_score("Ace", &values), 5);
}

#[test]
fn test_word_score_with_empty_table() {
    let values = LetterValues::new();
    assert_eq!(word_score("cab", &values), 0);
}

#[test]
fn test_compute_scores_matches_expected_table() {
    let scores = compute_scores(&test_words(), &test_letter_values());

    let expected: HashMap<String, u32> = [
        ("aa".to_string(), 2),
        ("bb".to_string(), 6),
        ("cab".to_string(), 7),
        ("bad".to_string(), 6),
        ("ace".to_string(), 5),
    ]
    .into_iter()
    .collect();

    assert_eq!(scores, expected);
}

#[test]
fn test_compute_scores_collapses_duplicate_words() {
    let words = vec!["cab".to_string(), "cab".to_string()];
    let scores = compute_scores(&words, &test_letter_values());

    assert_eq!(scores.len(), 1);
    assert_eq!(scores["cab"], 7);
}

#[test]
fn test_compute_scores_is_deterministic() {
    let words = test_words();
    let values = test_letter_values();

    let first = compute_scores(&words, &values);
    let second = compute_scores(&words, &values);

    assert_eq!(first, second);
}
