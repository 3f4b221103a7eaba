//! Day 4: forklift-accessible paper rolls

use crate::utils::grid::Grid;
use aoc_solver::{AocParser, ParseError, SolveError};

/// A roll is accessible with fewer than this many roll neighbours
const CROWDED: u8 = 4;

pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    rolls: Grid<bool>,
    neighbor_counts: Grid<u8>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rolls = Grid::parse(input, |b| match b {
            b'@' => Some(true),
            b'.' => Some(false),
            _ => None,
        })?;

        let mut neighbor_counts = rolls.map(|_| 0u8);
        for (r, c) in rolls.positions() {
            let count = rolls
                .neighbors_8(r, c)
                .filter(|&(nr, nc)| rolls.get(nr, nc) == Some(&true))
                .count();
            if let Some(slot) = neighbor_counts.get_mut(r, c) {
                *slot = count as u8;
            }
        }

        Ok(SharedData {
            rolls,
            neighbor_counts,
        })
    }
}

impl SharedData {
    fn accessible(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rolls.positions().filter(|&(r, c)| {
            self.rolls.get(r, c) == Some(&true)
                && self.neighbor_counts.get(r, c).is_some_and(|&n| n < CROWDED)
        })
    }
}

impl aoc_solver::Solver for Solver {
    #[tracing::instrument(skip_all)]
    fn part_1(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.accessible().count().to_string())
    }

    /// Remove accessible rolls until none are left, counting every removal.
    #[tracing::instrument(skip_all)]
    fn part_2(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut present = shared.rolls.clone();
        let mut counts = shared.neighbor_counts.clone();
        let mut worklist: Vec<(usize, usize)> = shared.accessible().collect();
        let mut removed = 0usize;

        while let Some((r, c)) = worklist.pop() {
            match present.get_mut(r, c) {
                Some(cell) if *cell => *cell = false,
                _ => continue,
            }
            removed += 1;

            for (nr, nc) in present.neighbors_8(r, c) {
                if present.get(nr, nc) != Some(&true) {
                    continue;
                }
                if let Some(count) = counts.get_mut(nr, nc) {
                    *count -= 1;
                    // Queued exactly once, when it first drops below the limit
                    if *count == CROWDED - 1 {
                        worklist.push((nr, nc));
                    }
                }
            }
        }

        tracing::debug!(removed);
        Ok(removed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::part_1(&mut shared).unwrap(), "13");
        assert_eq!(Solver::part_2(&mut shared).unwrap(), "43");
    }

    #[test]
    fn test_solid_block_peels_completely() {
        let mut shared = Solver::parse("@@@\n@@@\n@@@\n").unwrap();
        // Only the corners start with three neighbours
        assert_eq!(Solver::part_1(&mut shared).unwrap(), "4");
        assert_eq!(Solver::part_2(&mut shared).unwrap(), "9");
    }

    #[test]
    fn test_ragged_grid_rejected() {
        assert!(matches!(
            Solver::parse("@@.\n@.\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
