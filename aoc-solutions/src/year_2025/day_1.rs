//! Day 1: rotating the safe dial

use crate::utils::parse::{number, parse_lines};
use aoc_solver::{AocParser, ParseError, SolveError};

const DIAL_SIZE: i64 = 100;
const START: i64 = 50;

pub struct Solver;

/// One rotation; negative amounts turn left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation(i64);

#[derive(Debug)]
pub struct SharedData {
    rotations: Vec<Rotation>,
    common_result: Option<CommonResult>,
}

#[derive(Debug, Clone, Copy)]
struct CommonResult {
    zero_counts: u64,
    pass_zero_counts: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rotations = parse_lines(input, |line| {
            let (direction, amount) = line.split_at_checked(1).unwrap_or((line, ""));
            let amount: i64 = number::<u32>(amount)?.into();
            match direction {
                "L" => Ok(Rotation(-amount)),
                "R" => Ok(Rotation(amount)),
                _ => anyhow::bail!("first character needs to be 'L' or 'R'"),
            }
        })?;

        Ok(SharedData {
            rotations,
            common_result: None,
        })
    }
}

impl aoc_solver::Solver for Solver {
    #[tracing::instrument(skip_all)]
    fn part_1(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).zero_counts.to_string())
    }

    #[tracing::instrument(skip_all)]
    fn part_2(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).pass_zero_counts.to_string())
    }
}

fn solve_once_for_both(shared: &mut SharedData) -> CommonResult {
    *shared.common_result.get_or_insert_with(|| {
        let mut dial = START;
        let mut zero_counts = 0;
        let mut pass_zero_counts = 0;

        for &Rotation(amount) in &shared.rotations {
            pass_zero_counts += amount.unsigned_abs() / DIAL_SIZE as u64;
            let partial = amount % DIAL_SIZE;
            let moved = dial + partial;
            if dial != 0 && (moved <= 0 || moved >= DIAL_SIZE) {
                pass_zero_counts += 1;
            }

            dial = moved.rem_euclid(DIAL_SIZE);
            if dial == 0 {
                zero_counts += 1;
            }
        }

        tracing::debug!(rotations = shared.rotations.len(), final_position = dial);
        CommonResult {
            zero_counts,
            pass_zero_counts,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::part_1(&mut shared).unwrap(), "3");
        assert_eq!(Solver::part_2(&mut shared).unwrap(), "6");
    }

    #[test]
    fn test_full_turns_counted() {
        let mut shared = Solver::parse("R1000\n").unwrap();
        assert_eq!(Solver::part_1(&mut shared).unwrap(), "0");
        assert_eq!(Solver::part_2(&mut shared).unwrap(), "10");
    }

    #[test]
    fn test_leaving_zero_does_not_count() {
        let mut shared = Solver::parse("L50\nL5\nR5\n").unwrap();
        assert_eq!(Solver::part_1(&mut shared).unwrap(), "2");
        assert_eq!(Solver::part_2(&mut shared).unwrap(), "2");
    }

    #[test]
    fn test_bad_direction() {
        let err = Solver::parse("R3\nX4\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 2, .. }));
        assert!(Solver::parse("L-4\n").is_err());
    }
}
