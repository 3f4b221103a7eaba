//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Number of parts every puzzle has
pub const PARTS: u8 = 2;

/// Trait for parsing puzzle input into data shared by both parts
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Day1::parse("1\n2").unwrap(), vec![1, 2]);
/// ```
pub trait AocParser {
    /// The shared data structure that holds parsed input and intermediate results.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data when no transformation is needed
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait every day's solver implements.
///
/// Both parts receive mutable access to the same parsed data, so work done
/// by part 1 (sorting, precomputed tables) can be reused by part 2.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input.lines()
///             .map(|line| line.parse().map_err(|_|
///                 ParseError::InvalidFormat("Expected integer".to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1Solver {
///     fn part_1(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i32>().to_string())
///     }
///
///     fn part_2(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().product::<i32>().to_string())
///     }
/// }
///
/// let mut shared = Day1Solver::parse("2\n3\n4").unwrap();
/// assert_eq!(Day1Solver::solve_part(&mut shared, 1).unwrap(), "9");
/// assert_eq!(Day1Solver::solve_part(&mut shared, 2).unwrap(), "24");
/// assert!(Day1Solver::solve_part(&mut shared, 3).is_err());
/// ```
pub trait Solver: AocParser {
    /// Solve part 1 of the puzzle
    fn part_1(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;

    /// Solve part 2 of the puzzle
    fn part_2(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;

    /// Dispatch to the requested part
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartOutOfRange)` - `part` is neither 1 nor 2
    /// * any error returned by the part itself
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Self::part_1(shared),
            2 => Self::part_2(shared),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}
