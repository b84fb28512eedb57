use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_leaderboard::leaderboard::{build_for_letters, build_for_word_list};
use word_leaderboard::score::{compute_scores, LetterValues};
use word_leaderboard::{MAX_LEADERBOARD_LENGTH, MIN_WORD_LENGTH};

fn letter_values() -> LetterValues {
    ('a'..='z')
        .enumerate()
        .map(|(i, c)| (c, (i as u32 % 10) + 1))
        .collect()
}

/// Deterministic pseudo-dictionary: every onset/vowel/coda combination.
fn word_list() -> Vec<String> {
    let onsets = ["b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "pr", "st", "tr", "qu"];
    let vowels = ["a", "e", "i", "o", "u", "ai", "ee", "oo"];
    let codas = ["b", "d", "g", "l", "m", "n", "p", "r", "s", "t", "x", "z", "nd", "st"];

    let mut words = Vec::new();
    for onset in onsets {
        for vowel in vowels {
            for coda in codas {
                words.push(format!("{}{}{}", onset, vowel, coda));
            }
        }
    }
    words
}

fn bench_compute_scores(c: &mut Criterion) {
    let words = word_list();
    let values = letter_values();

    c.bench_function("compute_scores", |b| {
        b.iter(|| compute_scores(black_box(&words), black_box(&values)))
    });
}

fn bench_build_leaderboards(c: &mut Criterion) {
    let words = word_list();
    let values = letter_values();
    let scores = compute_scores(&words, &values);

    c.bench_function("build_for_word_list", |b| {
        b.iter(|| {
            build_for_word_list(
                black_box(&scores),
                MIN_WORD_LENGTH,
                MAX_LEADERBOARD_LENGTH,
            )
        })
    });

    c.bench_function("build_for_letters", |b| {
        b.iter(|| {
            build_for_letters(
                black_box(&scores),
                black_box("traindeesto"),
                MAX_LEADERBOARD_LENGTH,
            )
        })
    });
}

criterion_group!(benches, bench_compute_scores, bench_build_leaderboards);
criterion_main!(benches);
