//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Advent of Code 2025 solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run an Advent of Code 2025 solver", version)]
pub struct Args {
    /// Day to run (1-25)
    #[arg(value_parser = parse_day)]
    pub day: u8,

    /// Input file (defaults to <INPUT_DIR>/dayDD.txt)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory holding the dayDD.txt input files
    #[arg(long, default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Part to run (runs both parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Print parse and solve durations after the answers
    #[arg(long)]
    pub timings: bool,

    /// More log output on stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Validate the positional day argument
pub fn parse_day(value: &str) -> Result<u8, String> {
    let day: i64 = value
        .trim()
        .parse()
        .map_err(|_| format!("The day must be a number. Got: {value}"))?;
    u8::try_from(day)
        .ok()
        .filter(|day| (1..=25).contains(day))
        .ok_or_else(|| format!("The day must be a number within the range [1, 25]. Got: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc", "8"]).unwrap();
        assert_eq!(args.day, 8);
        assert_eq!(args.input, None);
        assert_eq!(args.input_dir, PathBuf::from("inputs"));
        assert_eq!(args.part, None);
        assert!(!args.quiet && !args.timings);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "aoc", "12", "-i", "in.txt", "--input-dir", "elsewhere", "-p", "2", "-q",
            "--timings", "-vv",
        ])
        .unwrap();
        assert_eq!(args.day, 12);
        assert_eq!(args.input, Some(PathBuf::from("in.txt")));
        assert_eq!(args.input_dir, PathBuf::from("elsewhere"));
        assert_eq!(args.part, Some(2));
        assert!(args.quiet && args.timings);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_day_messages() {
        assert_eq!(parse_day("x").unwrap_err(), "The day must be a number. Got: x");
        assert_eq!(
            parse_day("26").unwrap_err(),
            "The day must be a number within the range [1, 25]. Got: 26"
        );
        assert_eq!(
            parse_day("-1").unwrap_err(),
            "The day must be a number within the range [1, 25]. Got: -1"
        );
        assert!(parse_day("0").is_err());
        assert_eq!(parse_day(" 7 "), Ok(7));
    }

    #[test]
    fn test_bad_arguments_rejected_by_clap() {
        let err = Args::try_parse_from(["aoc", "nine"]).unwrap_err();
        assert!(err.to_string().contains("The day must be a number. Got: nine"));
        assert!(Args::try_parse_from(["aoc", "3", "-p", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc"]).is_err());
    }

    proptest! {
        #[test]
        fn prop_day_range(day in -100i64..100) {
            let parsed = parse_day(&day.to_string());
            if (1..=25).contains(&day) {
                prop_assert_eq!(parsed, Ok(day as u8));
            } else {
                prop_assert!(parsed.is_err());
            }
        }
    }
}
