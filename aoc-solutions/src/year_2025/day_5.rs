//! Day 5: fresh ingredient id ranges

use crate::utils::intervals::{Interval, IntervalSet};
use crate::utils::parse::{number, split_once};
use aoc_solver::{AocParser, ParseError, SolveError};

pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    fresh: IntervalSet,
    available: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    /// Ranges up to the first blank line, ingredient ids after it.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut ranges = Vec::new();
        let mut available = Vec::new();
        let mut in_ranges = true;

        for (index, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                if !ranges.is_empty() {
                    in_ranges = false;
                }
                continue;
            }

            let parsed = if in_ranges {
                parse_range(line).map(|range| ranges.push(range))
            } else {
                number(line).map(|id| available.push(id))
            };
            parsed.map_err(|e| ParseError::invalid_line(index, line, format!("{e:#}")))?;
        }

        if ranges.is_empty() {
            return Err(ParseError::MissingData("no fresh id ranges".to_string()));
        }
        tracing::debug!(ranges = ranges.len(), ids = available.len());

        Ok(SharedData {
            fresh: IntervalSet::merge(ranges),
            available,
        })
    }
}

fn parse_range(line: &str) -> anyhow::Result<Interval> {
    let (start, end) = split_once(line, "-")?;
    Interval::new(number(start)?, number(end)?)
}

impl aoc_solver::Solver for Solver {
    #[tracing::instrument(skip_all)]
    fn part_1(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fresh = shared
            .available
            .iter()
            .filter(|&&id| shared.fresh.contains(id))
            .count();
        Ok(fresh.to_string())
    }

    #[tracing::instrument(skip_all)]
    fn part_2(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.fresh.covered().to_string())
    }
}
