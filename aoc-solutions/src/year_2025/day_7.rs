//! Day 7: tachyon beams through a manifold of splitters

use aoc_solver::{AocParser, ParseError, SolveError};
use std::collections::BTreeMap;

pub struct Solver;

/// Rows below the entry point, borrowed from the input
#[derive(Debug)]
pub struct Manifold<'a> {
    start: usize,
    rows: Vec<&'a [u8]>,
    beams: Option<BeamSummary>,
}

#[derive(Debug, Clone, Copy)]
struct BeamSummary {
    splits: u64,
    timelines: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = Manifold<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty());

        let (_, first) = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("empty manifold".to_string()))?;
        let start = first
            .find('S')
            .ok_or_else(|| ParseError::MissingData("no 'S' in the first row".to_string()))?;

        let rows = lines
            .map(|(index, line)| match line.bytes().find(|&b| !matches!(b, b'.' | b'^')) {
                Some(bad) => Err(ParseError::invalid_line(
                    index,
                    line,
                    format!("unexpected character {:?}", bad as char),
                )),
                None => Ok(line.as_bytes()),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Manifold {
            start,
            rows,
            beams: None,
        })
    }
}

impl Manifold<'_> {
    /// Send the beam down once; beams landing on the same column merge but
    /// keep their multiplicity.
    fn beams(&mut self) -> BeamSummary {
        *self.beams.get_or_insert_with(|| {
            let mut beams: BTreeMap<isize, u64> = BTreeMap::from([(self.start as isize, 1)]);
            let mut splits = 0;

            for row in &self.rows {
                let mut next = BTreeMap::new();
                for (&column, &count) in &beams {
                    let on_splitter = usize::try_from(column)
                        .ok()
                        .and_then(|c| row.get(c))
                        .is_some_and(|&b| b == b'^');
                    if on_splitter {
                        splits += 1;
                        *next.entry(column - 1).or_insert(0) += count;
                        *next.entry(column + 1).or_insert(0) += count;
                    } else {
                        *next.entry(column).or_insert(0) += count;
                    }
                }
                beams = next;
            }

            tracing::debug!(splits, columns = beams.len());
            BeamSummary {
                splits,
                timelines: beams.values().sum(),
            }
        })
    }
}

impl aoc_solver::Solver for Solver {
    #[tracing::instrument(skip_all)]
    fn part_1(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.beams().splits.to_string())
    }

    #[tracing::instrument(skip_all)]
    fn part_2(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.beams().timelines.to_string())
    }
}
