//! Solver instance implementation

use crate::error::{ParseError, SolveError};
use crate::solver::Solver;
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The part that was solved
    pub part: u8,
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Both answers of one day
#[derive(Debug, Clone)]
pub struct Solution {
    pub day: u8,
    pub part_1: SolveResult,
    pub part_2: SolveResult,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Day {}", self.day)?;
        writeln!(f, "Part 1: {}", self.part_1.answer)?;
        writeln!(f, "===========================")?;
        write!(f, "Part 2: {}", self.part_2.answer)
    }
}

/// A solver instance for one day, holding the parsed input
///
/// The input is parsed exactly once, when the instance is created; every
/// later call to [`DynSolver::solve`] works on the same shared data.
pub struct SolverInstance<'a, S: Solver> {
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Create a new solver instance by parsing input
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Successfully parsed and created instance with timing
    /// * `Err(ParseError)` - Parsing failed
    pub fn new(day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();
        tracing::debug!(day, bytes = input.len(), "parsed input");

        Ok(Self {
            day,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn example(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     let result = solver.solve(1)?;
///     println!("Part 1: {} (took {:?})", result.answer, result.duration());
///
///     // Or both parts at once, formatted the way the CLI prints them
///     println!("{}", solver.solve_all()?);
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Get the day for this solver
    fn day(&self) -> u8;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Convenience: get parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }

    /// Solve part 1 then part 2 on the same parsed input
    fn solve_all(&mut self) -> Result<Solution, SolveError> {
        let part_1 = self.solve(1)?;
        let part_2 = self.solve(2)?;
        Ok(Solution {
            day: self.day(),
            part_1,
            part_2,
        })
    }
}

impl<'a, S: Solver> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let _span = tracing::info_span!("solve", day = self.day, part).entered();
        let solve_start = Utc::now();
        let answer = S::solve_part(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            part,
            answer,
            solve_start,
            solve_end,
        })
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }
}
