//! Day 2: ids made of a repeated digit sequence

use crate::utils::intervals::{Interval, IntervalSet};
use crate::utils::parse::{number, split_once};
use aoc_solver::{AocParser, ParseError, SolveError};
use std::collections::HashSet;

pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = IntervalSet;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let ranges = input
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                parse_range(entry)
                    .map_err(|e| ParseError::InvalidFormat(format!("range {entry:?}: {e:#}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if ranges.is_empty() {
            return Err(ParseError::MissingData("no id ranges".to_string()));
        }
        Ok(IntervalSet::merge(ranges))
    }
}

fn parse_range(entry: &str) -> anyhow::Result<Interval> {
    let (start, end) = split_once(entry, "-")?;
    Interval::new(number(start)?, number(end)?)
}

impl aoc_solver::Solver for Solver {
    #[tracing::instrument(skip_all)]
    fn part_1(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_invalid(shared, true).to_string())
    }

    #[tracing::instrument(skip_all)]
    fn part_2(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_invalid(shared, false).to_string())
    }
}

fn sum_invalid(ranges: &IntervalSet, only_twice: bool) -> u64 {
    let Some(max) = ranges.max() else {
        return 0;
    };
    let candidates = repeated_ids(max, only_twice);
    tracing::debug!(candidates = candidates.len(), max);
    candidates.into_iter().filter(|&id| ranges.contains(id)).sum()
}

/// Every id up to `max` whose digits are one sequence repeated.
///
/// A sequence `s` of length `L` repeated `r` times is `s * mask` with
/// `mask = 1 + 10^L + ... + 10^(L*(r-1))`.
fn repeated_ids(max: u64, only_twice: bool) -> HashSet<u64> {
    let mut found = HashSet::new();
    let mut base: u64 = 1;
    let mut shift: u64 = 10;

    while base.checked_mul(shift + 1).is_some_and(|id| id <= max) {
        let mut mask = shift + 1;
        loop {
            for sequence in base..base * 10 {
                match sequence.checked_mul(mask) {
                    Some(id) if id <= max => {
                        found.insert(id);
                    }
                    _ => break,
                }
            }
            if only_twice {
                break;
            }
            match mask.checked_mul(shift).and_then(|m| m.checked_add(1)) {
                Some(next) if base.checked_mul(next).is_some_and(|id| id <= max) => mask = next,
                _ => break,
            }
        }
        base *= 10;
        shift *= 10;
    }
    found
}
