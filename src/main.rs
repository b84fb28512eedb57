//! Word Leaderboard CLI
//!
//! Interactive command-line interface for the word leaderboard engine.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use word_leaderboard::score::word_score;
use word_leaderboard::{LeaderboardEntry, ScoreEngine};

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const USAGE_TEXT: &str = include_str!("text/usage.txt");

const DEFAULT_WORDS_PATH: &str = "data/wordlist.txt";
const DEFAULT_VALUES_PATH: &str = "data/letterValues.txt";

struct Options {
    words_path: PathBuf,
    values_path: PathBuf,
}

/// Strip `--words`/`--values` overrides, leaving the command arguments.
fn parse_options(args: &[String]) -> (Options, Vec<String>) {
    let mut options = Options {
        words_path: PathBuf::from(DEFAULT_WORDS_PATH),
        values_path: PathBuf::from(DEFAULT_VALUES_PATH),
    };
    let mut rest = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--words" | "--values" => match iter.next() {
                Some(path) => {
                    if arg == "--words" {
                        options.words_path = PathBuf::from(path);
                    } else {
                        options.values_path = PathBuf::from(path);
                    }
                }
                None => {
                    eprintln!("{} requires a path argument.", arg);
                    std::process::exit(1);
                }
            },
            _ => rest.push(arg.clone()),
        }
    }

    (options, rest)
}

fn load_engine(options: &Options) -> ScoreEngine {
    match ScoreEngine::from_files(&options.words_path, &options.values_path) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

fn print_banner() {
    for line in BANNER_TEXT.lines().take(5) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

fn print_leaderboard(entries: &[LeaderboardEntry]) {
    if entries.is_empty() {
        println!("No words qualify.");
        return;
    }
    println!("{:>4} {:>16} {:>7}", "#", "Word", "Score");
    println!("{}", "-".repeat(30));
    for (i, entry) in entries.iter().enumerate() {
        println!("{:>4} {:>16} {:>7}", i + 1, entry.word, entry.score);
    }
}

fn run_interactive(mut engine: ScoreEngine) {
    print_banner();

    println!(
        "Loaded {} words and {} letter values.",
        engine.word_count(),
        engine.letter_value_count()
    );
    println!("Type 'help' for commands.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                print_help();
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "top" | "t" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(10);
                let board = engine.build_leaderboard_for_word_list();
                println!();
                print_leaderboard(&board[..n.min(board.len())]);
                println!();
            }
            "letters" | "l" => {
                if parts.len() < 2 {
                    println!("Usage: letters <pool>");
                    println!("Example: letters deora");
                    continue;
                }
                let board = engine.build_leaderboard_for_letters(parts[1]);
                println!();
                println!("Top words from letters '{}':", parts[1]);
                print_leaderboard(&board);
                println!();
            }
            "score" | "sc" => {
                if parts.len() < 2 {
                    println!("Usage: score <word>");
                    continue;
                }
                let score = word_score(parts[1], engine.letter_values());
                println!("{}: {}", parts[1], score);
            }
            "recompute" => {
                let count = engine.compute_word_scores().len();
                println!("Recomputed scores for {} words.", count);
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options, command) = parse_options(&args);

    if command.is_empty() {
        run_interactive(load_engine(&options));
        return;
    }

    match command[0].as_str() {
        "--help" | "-h" => {
            println!("{}", USAGE_TEXT);
        }
        "top" => {
            let mut engine = load_engine(&options);
            print_leaderboard(&engine.build_leaderboard_for_word_list());
        }
        "letters" => {
            if command.len() < 2 {
                eprintln!("Usage: word-leaderboard letters <pool>");
                std::process::exit(1);
            }
            let mut engine = load_engine(&options);
            print_leaderboard(&engine.build_leaderboard_for_letters(&command[1]));
        }
        "score" => {
            if command.len() < 2 {
                eprintln!("Usage: word-leaderboard score <word>");
                std::process::exit(1);
            }
            let engine = load_engine(&options);
            println!("{}", word_score(&command[1], engine.letter_values()));
        }
        _ => {
            eprintln!("Unknown command: {}", command[0]);
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
    }
}
