//! Day 3: joltage from battery banks

use aoc_solver::{AocParser, ParseError, SolveError};

pub struct Solver;

impl AocParser for Solver {
    /// One bank of digit values per line
    type SharedData<'a> = Vec<Vec<u8>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        crate::utils::parse::parse_lines(input, |line| {
            line.bytes()
                .map(|b| match b {
                    b'0'..=b'9' => Ok(b - b'0'),
                    _ => Err(anyhow::anyhow!("{:?} is not a digit", b as char)),
                })
                .collect()
        })
    }
}

impl aoc_solver::Solver for Solver {
    #[tracing::instrument(skip_all)]
    fn part_1(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_joltage(shared, 2).to_string())
    }

    #[tracing::instrument(skip_all)]
    fn part_2(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_joltage(shared, 12).to_string())
    }
}

fn total_joltage(banks: &[Vec<u8>], count: usize) -> u64 {
    banks.iter().map(|bank| max_joltage(bank, count)).sum()
}

/// Largest number made of `count` digits of `bank`, kept in order.
///
/// A smaller digit is popped while a larger one follows and enough digits
/// remain to still fill `count` places.
fn max_joltage(bank: &[u8], count: usize) -> u64 {
    let mut stack: Vec<u8> = Vec::with_capacity(count);
    for (i, &digit) in bank.iter().enumerate() {
        let remaining = bank.len() - i;
        while stack.last().is_some_and(|&top| digit > top) && stack.len() + remaining > count {
            stack.pop();
        }
        if stack.len() < count {
            stack.push(digit);
        }
    }
    stack.iter().fold(0, |acc, &d| acc * 10 + u64::from(d))
}
