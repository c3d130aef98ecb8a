//! Command-line tools for isowords puzzles.
//!
//! # Usage
//!
//! Generate a random puzzle, or reproduce one from its seed:
//!
//! ```sh
//! isowords generate
//! isowords generate --seed e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
//! ```
//!
//! Generate a daily challenge puzzle:
//!
//! ```sh
//! isowords generate --daily 2026-10-17 --mode unlimited
//! ```
//!
//! Verify submitted games against a word list (one word per line):
//!
//! ```sh
//! isowords verify --dictionary words.txt game1.json game2.json
//! ```
//!
//! Set `RUST_LOG=debug` to see why moves are rejected.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use isowords_core::Language;
use isowords_game::{RepeatedWordPolicy, VerifyOptions};
use isowords_generator::{ChallengeDate, DailyChallenge, GameMode, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

use crate::{error::CliError, submission::SubmissionFile, word_list::WordList};

mod error;
mod submission;
mod word_list;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a puzzle and print its seed and letters.
    Generate(GenerateArgs),
    /// Replay submitted games and check their scores.
    Verify(VerifyArgs),
}

#[derive(Debug, clap::Args)]
struct GenerateArgs {
    /// Seed to generate from, as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "daily")]
    seed: Option<PuzzleSeed>,

    /// Generate the daily challenge of this date.
    #[arg(long, value_name = "YYYY-MM-DD")]
    daily: Option<ChallengeDate>,

    /// Game mode of the daily challenge [default: timed].
    #[arg(long, value_name = "MODE", requires = "daily")]
    mode: Option<GameMode>,

    /// Puzzle language.
    #[arg(long, value_name = "LANG", default_value = "en")]
    language: Language,

    /// Print the generated puzzle as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, clap::Args)]
struct VerifyArgs {
    /// Word list with one word per line.
    #[arg(short, long, value_name = "FILE")]
    dictionary: PathBuf,

    /// Language of the word list.
    #[arg(long, value_name = "LANG", default_value = "en")]
    language: Language,

    /// Reject words that were already played earlier in the same game.
    #[arg(long)]
    reject_repeated_words: bool,

    /// Submission files to verify.
    #[arg(value_name = "SUBMISSION", required = true)]
    submissions: Vec<PathBuf>,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let result = match &args.command {
        Command::Generate(args) => generate(args),
        Command::Verify(args) => verify(args),
    };
    result.unwrap_or_else(|err| {
        eprintln!("error: {err}");
        ExitCode::FAILURE
    })
}

fn generate(args: &GenerateArgs) -> Result<ExitCode, CliError> {
    let challenge = args.daily.map(|date| DailyChallenge {
        date,
        mode: args.mode.unwrap_or(GameMode::Timed),
        language: args.language,
    });
    let generated = match (&challenge, args.seed) {
        (Some(challenge), _) => challenge.generate(),
        (None, Some(seed)) => PuzzleGenerator::new(args.language).generate_with_seed(seed),
        (None, None) => PuzzleGenerator::new(args.language).generate(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(challenge) = &challenge {
        println!("Challenge:");
        println!("  {}", challenge.label());
        println!();
    }
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Language:");
    println!("  {}", generated.language);
    println!();
    println!("Puzzle:");
    println!("  {}", generated.puzzle);
    Ok(ExitCode::SUCCESS)
}

fn verify(args: &VerifyArgs) -> Result<ExitCode, CliError> {
    let words = WordList::load(&args.dictionary, args.language)?;
    let policy = if args.reject_repeated_words {
        RepeatedWordPolicy::Reject
    } else {
        RepeatedWordPolicy::Allow
    };
    let options = VerifyOptions::default().repeated_word_policy(policy);

    let outcomes = args
        .submissions
        .par_iter()
        .map(|path| {
            let outcome =
                SubmissionFile::load(path).and_then(|file| file.verify(&words, options));
            (path, outcome)
        })
        .collect::<Vec<_>>();

    let mut rejected = 0;
    for (path, outcome) in &outcomes {
        match outcome {
            Ok(result) => println!(
                "{}: accepted, {} points in {} words",
                path.display(),
                result.total_score,
                result.words().count()
            ),
            Err(err) => {
                rejected += 1;
                println!("{}: rejected ({}): {err}", path.display(), err.kind());
            }
        }
    }
    log::info!(
        "{} of {} submissions accepted",
        outcomes.len() - rejected,
        outcomes.len()
    );

    Ok(if rejected == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    fn generate_args(argv: &[&str]) -> Result<GenerateArgs, clap::Error> {
        let args = Args::try_parse_from(["isowords", "generate"].iter().chain(argv).copied())?;
        match args.command {
            Command::Generate(args) => Ok(args),
            Command::Verify(_) => panic!("expected generate"),
        }
    }

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_mode_requires_daily() {
        let err = generate_args(&["--mode", "unlimited"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let args = generate_args(&["--daily", "2026-10-17", "--mode", "unlimited"]).unwrap();
        assert_eq!(args.mode, Some(GameMode::Unlimited));
        assert!(args.daily.is_some());
    }

    #[test]
    fn test_daily_mode_defaults_to_timed() {
        let args = generate_args(&["--daily", "2026-10-17"]).unwrap();
        assert_eq!(args.mode, None);
        assert_eq!(args.mode.unwrap_or(GameMode::Timed), GameMode::Timed);
    }

    #[test]
    fn test_seed_conflicts_with_daily() {
        let seed = "00".repeat(32);
        let err = generate_args(&["--seed", &seed, "--daily", "2026-10-17"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
