//! Day 10: configuring factory machines
//!
//! Part 1 is a shortest path over light states where each button XORs a
//! mask. Part 2 is an integer linear system `A x = b` (`A[i][j] = 1` when
//! button `j` feeds counter `i`) minimising `sum(x)`. It is reduced with
//! fraction-free Gaussian elimination, then the few free variables are
//! enumerated within bounds every button inherits from the counters it feeds.

use crate::utils::parse::{number, parse_lines};
use anyhow::Context;
use aoc_solver::{AocParser, ParseError, SolveError};
use std::collections::VecDeque;

/// Light states are enumerated exhaustively, so keep them small
const MAX_LIGHTS: usize = 20;

pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    lights: usize,
    target: u32,
    buttons: Vec<Vec<usize>>,
    joltage: Vec<i64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, parse_machine)
    }
}

fn strip_wrapped<'a>(token: &'a str, open: char, close: char) -> anyhow::Result<&'a str> {
    token
        .strip_prefix(open)
        .and_then(|t| t.strip_suffix(close))
        .with_context(|| format!("{token:?} is not wrapped in {open}{close}"))
}

fn parse_machine(line: &str) -> anyhow::Result<Machine> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [diagram, buttons @ .., joltage] = tokens.as_slice() else {
        anyhow::bail!("expected a light diagram, buttons and joltage requirements");
    };

    let diagram = strip_wrapped(diagram, '[', ']')?;
    anyhow::ensure!(
        diagram.len() <= MAX_LIGHTS,
        "{} lights is more than the supported {MAX_LIGHTS}",
        diagram.len()
    );
    let mut target = 0u32;
    for (i, c) in diagram.chars().enumerate() {
        match c {
            '#' => target |= 1 << i,
            '.' => {}
            other => anyhow::bail!("unexpected light {other:?}"),
        }
    }
    let lights = diagram.len();

    let buttons = buttons
        .iter()
        .map(|button| {
            let wiring = strip_wrapped(button, '(', ')')?
                .split(',')
                .map(number::<usize>)
                .collect::<anyhow::Result<Vec<_>>>()?;
            if let Some(bad) = wiring.iter().find(|&&light| light >= lights) {
                anyhow::bail!("button {button} wires light {bad}, only {lights} exist");
            }
            Ok(wiring)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let joltage = strip_wrapped(joltage, '{', '}')?
        .split(',')
        .map(|value| number::<u32>(value).map(i64::from))
        .collect::<anyhow::Result<Vec<_>>>()?;
    anyhow::ensure!(
        joltage.len() == lights,
        "{} joltage requirements for {lights} lights",
        joltage.len()
    );

    Ok(Machine {
        lights,
        target,
        buttons,
        joltage,
    })
}

impl Machine {
    /// Fewest presses that light exactly the target pattern (BFS)
    fn fewest_toggles(&self) -> Option<u64> {
        if self.target == 0 {
            return Some(0);
        }
        let toggles: Vec<u32> = self
            .buttons
            .iter()
            .map(|wiring| wiring.iter().fold(0, |mask, &light| mask ^ (1 << light)))
            .collect();

        let mut visited = vec![false; 1 << self.lights];
        visited[0] = true;
        let mut queue = VecDeque::from([(0u32, 0u64)]);
        while let Some((state, presses)) = queue.pop_front() {
            for &toggle in &toggles {
                let next = state ^ toggle;
                if next == self.target {
                    return Some(presses + 1);
                }
                if !std::mem::replace(&mut visited[next as usize], true) {
                    queue.push_back((next, presses + 1));
                }
            }
        }
        None
    }

    /// Fewest presses that bring every counter to its joltage requirement
    fn fewest_increments(&self) -> Option<i64> {
        let system = LinearSystem::reduce(self)?;
        tracing::trace!(
            buttons = self.buttons.len(),
            free = system.free.len(),
            "reduced machine"
        );
        system.minimum_total()
    }
}

/// Reduced row echelon form of the counter equations
#[derive(Debug)]
struct LinearSystem {
    /// One row per pivot, `columns + 1` wide (right-hand side last)
    rows: Vec<Vec<i64>>,
    pivots: Vec<usize>,
    free: Vec<usize>,
    /// Upper bound on the presses of each button
    bounds: Vec<i64>,
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

fn normalize(row: &mut [i64]) {
    let divisor = row.iter().fold(0, |g, &v| gcd(g, v));
    if divisor > 1 {
        row.iter_mut().for_each(|v| *v /= divisor);
    }
}

impl LinearSystem {
    /// Eliminate; `None` when the equations contradict each other
    fn reduce(machine: &Machine) -> Option<Self> {
        let columns = machine.buttons.len();
        let mut rows: Vec<Vec<i64>> = machine
            .joltage
            .iter()
            .map(|&target| {
                let mut row = vec![0; columns + 1];
                row[columns] = target;
                row
            })
            .collect();
        for (j, wiring) in machine.buttons.iter().enumerate() {
            for &counter in wiring {
                rows[counter][j] = 1;
            }
        }

        let mut pivots = Vec::new();
        let mut free = Vec::new();
        for column in 0..columns {
            let rank = pivots.len();
            let Some(found) = (rank..rows.len()).find(|&r| rows[r][column] != 0) else {
                free.push(column);
                continue;
            };
            rows.swap(rank, found);
            if rows[rank][column] < 0 {
                rows[rank].iter_mut().for_each(|v| *v = -*v);
            }

            let pivot_row = rows[rank].clone();
            let pivot = pivot_row[column];
            for (r, row) in rows.iter_mut().enumerate() {
                let factor = row[column];
                if r == rank || factor == 0 {
                    continue;
                }
                for (value, &p) in row.iter_mut().zip(&pivot_row) {
                    *value = *value * pivot - p * factor;
                }
                normalize(row);
            }
            pivots.push(column);
        }

        // Leftover rows read 0 = rhs
        if rows[pivots.len()..].iter().any(|row| row[columns] != 0) {
            return None;
        }
        rows.truncate(pivots.len());

        let bounds = machine
            .buttons
            .iter()
            .map(|wiring| {
                wiring
                    .iter()
                    .map(|&counter| machine.joltage[counter])
                    .min()
                    .unwrap_or(0)
            })
            .collect();

        Some(Self {
            rows,
            pivots,
            free,
            bounds,
        })
    }

    fn minimum_total(&self) -> Option<i64> {
        let mut values = vec![0; self.bounds.len()];
        let mut best = None;
        self.search(0, 0, &mut values, &mut best);
        best
    }

    fn search(&self, depth: usize, partial: i64, values: &mut [i64], best: &mut Option<i64>) {
        if best.is_some_and(|b| partial >= b) {
            return;
        }

        let Some(&variable) = self.free.get(depth) else {
            if let Some(total) = self.complete(partial, values) {
                if best.is_none_or(|b| total < b) {
                    *best = Some(total);
                }
            }
            return;
        };

        for presses in 0..=self.bounds[variable] {
            values[variable] = presses;
            self.search(depth + 1, partial + presses, values, best);
        }
        values[variable] = 0;
    }

    /// Solve every pivot variable from the fixed free ones
    fn complete(&self, partial: i64, values: &[i64]) -> Option<i64> {
        let rhs_column = self.bounds.len();
        let mut total = partial;
        for (row, &pivot) in self.rows.iter().zip(&self.pivots) {
            let rest: i64 = self.free.iter().map(|&f| row[f] * values[f]).sum();
            let remainder = row[rhs_column] - rest;
            let coefficient = row[pivot];
            if remainder % coefficient != 0 {
                return None;
            }
            let presses = remainder / coefficient;
            if !(0..=self.bounds[pivot]).contains(&presses) {
                return None;
            }
            total += presses;
        }
        Some(total)
    }
}

impl aoc_solver::Solver for Solver {
    #[tracing::instrument(skip_all)]
    fn part_1(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for (i, machine) in shared.iter().enumerate() {
            total += machine.fewest_toggles().ok_or_else(|| {
                SolveError::Unsolvable(format!("machine {} can never show its lights", i + 1))
            })?;
        }
        Ok(total.to_string())
    }

    #[tracing::instrument(skip_all)]
    fn part_2(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for (i, machine) in shared.iter().enumerate() {
            total += machine.fewest_increments().ok_or_else(|| {
                SolveError::Unsolvable(format!("machine {} can never reach its joltage", i + 1))
            })?;
        }
        Ok(total.to_string())
    }
}
