//! Running one day's solver over an input

use crate::config::Config;
use crate::error::CliError;
use aoc_solver::{Solution, SolveResult, SolverRegistry};
use chrono::TimeDelta;

/// Answers produced by one run
#[derive(Debug, Clone)]
pub enum Answers {
    /// Both parts, in order
    Both(Solution),
    /// Only the part selected with `--part`
    Single(SolveResult),
}

/// Everything the output formatter needs about one run
#[derive(Debug, Clone)]
pub struct Report {
    pub day: u8,
    pub parse_duration: TimeDelta,
    pub answers: Answers,
}

impl Report {
    /// Results in part order
    pub fn results(&self) -> Vec<&SolveResult> {
        match &self.answers {
            Answers::Both(solution) => vec![&solution.part_1, &solution.part_2],
            Answers::Single(result) => vec![result],
        }
    }
}

/// Parse `input` with the day's solver and solve the configured part(s).
///
/// The input is parsed once; both parts share the parsed data.
pub fn run(registry: &SolverRegistry, config: &Config, input: &str) -> Result<Report, CliError> {
    let mut solver = registry.create_solver(config.day, input)?;
    tracing::info!(
        day = config.day,
        parse = ?solver.parse_duration(),
        "parsed input"
    );

    let answers = match config.part {
        Some(part) => Answers::Single(solver.solve(part)?),
        None => Answers::Both(solver.solve_all()?),
    };

    Ok(Report {
        day: solver.day(),
        parse_duration: solver.parse_duration(),
        answers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverError;
    use std::path::PathBuf;
    use tracing::Level;

    fn config(day: u8, part: Option<u8>) -> Config {
        Config {
            day,
            input_path: PathBuf::new(),
            part,
            quiet: false,
            timings: false,
            log_level: Level::WARN,
        }
    }

    const DAY_5: &str = "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n";

    #[test]
    fn test_both_parts() {
        let registry = aoc_solutions::registry().unwrap();
        let report = run(&registry, &config(5, None), DAY_5).unwrap();
        assert_eq!(report.day, 5);
        let answers: Vec<&str> = report.results().iter().map(|r| r.answer.as_str()).collect();
        assert_eq!(answers, ["3", "14"]);
    }

    #[test]
    fn test_single_part() {
        let registry = aoc_solutions::registry().unwrap();
        let report = run(&registry, &config(5, Some(2)), DAY_5).unwrap();
        let results = report.results();
        assert_eq!(results.len(), 1);
        assert_eq!((results[0].part, results[0].answer.as_str()), (2, "14"));
    }

    #[test]
    fn test_unregistered_day() {
        let registry = aoc_solutions::registry().unwrap();
        let err = run(&registry, &config(20, None), "").unwrap_err();
        assert!(matches!(err, CliError::Solver(SolverError::NotFound(20))));
    }

    #[test]
    fn test_parse_failure_surfaces() {
        let registry = aoc_solutions::registry().unwrap();
        let err = run(&registry, &config(8, None), "1,2\n").unwrap_err();
        assert!(matches!(err, CliError::Solver(SolverError::ParseError(_))));
        assert!(err.to_string().contains("Invalid line 1"), "{err}");
    }
}
