//! Day 9: largest rectangle between red tiles

use crate::utils::parse::{numbers, parse_lines};
use aoc_solver::{AocParser, ParseError, SolveError};
use itertools::Itertools;

pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    x: i64,
    y: i64,
}

/// An axis-aligned polygon edge at coordinate `at`, spanning `low..=high`
/// on the other axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Segment {
    at: i64,
    low: i64,
    high: i64,
}

#[derive(Debug)]
pub struct Floor {
    tiles: Vec<Tile>,
    /// Sorted by `x`
    vertical: Vec<Segment>,
    /// Sorted by `y`
    horizontal: Vec<Segment>,
}

impl AocParser for Solver {
    type SharedData<'a> = Floor;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let tiles = parse_lines(input, |line| {
            let [x, y] = numbers::<i64, 2>(line, ',')?;
            Ok(Tile { x, y })
        })?;

        let mut vertical = Vec::new();
        let mut horizontal = Vec::new();
        for (i, &a) in tiles.iter().enumerate() {
            let b = tiles[(i + 1) % tiles.len()];
            if a.x == b.x {
                vertical.push(Segment {
                    at: a.x,
                    low: a.y.min(b.y),
                    high: a.y.max(b.y),
                });
            } else if a.y == b.y {
                horizontal.push(Segment {
                    at: a.y,
                    low: a.x.min(b.x),
                    high: a.x.max(b.x),
                });
            } else {
                return Err(ParseError::InvalidFormat(format!(
                    "tiles {},{} and {},{} are not on a shared row or column",
                    a.x, a.y, b.x, b.y
                )));
            }
        }
        vertical.sort_unstable();
        horizontal.sort_unstable();

        Ok(Floor {
            tiles,
            vertical,
            horizontal,
        })
    }
}

/// Cells covered by the rectangle with opposite corners `a` and `b`
fn area(a: Tile, b: Tile) -> u64 {
    (a.x.abs_diff(b.x) + 1) * (a.y.abs_diff(b.y) + 1)
}

/// Whether any segment strictly between `low` and `high` overlaps the open
/// span `(other_low, other_high)`
fn crosses_interior(
    segments: &[Segment],
    (low, high): (i64, i64),
    (other_low, other_high): (i64, i64),
) -> bool {
    let start = segments.partition_point(|s| s.at <= low);
    let end = segments.partition_point(|s| s.at < high);
    segments
        .get(start..end)
        .unwrap_or_default()
        .iter()
        .any(|s| other_low < s.high && s.low < other_high)
}

impl Floor {
    fn pairs(&self) -> impl Iterator<Item = (Tile, Tile)> + '_ {
        self.tiles.iter().copied().tuple_combinations()
    }

    fn fits_inside(&self, a: Tile, b: Tile) -> bool {
        let xs = (a.x.min(b.x), a.x.max(b.x));
        let ys = (a.y.min(b.y), a.y.max(b.y));
        !crosses_interior(&self.vertical, xs, ys) && !crosses_interior(&self.horizontal, ys, xs)
    }

    fn require_pair(&self) -> Result<(), SolveError> {
        if self.tiles.len() < 2 {
            return Err(SolveError::Unsolvable(format!(
                "need two red tiles, found {}",
                self.tiles.len()
            )));
        }
        Ok(())
    }
}

impl aoc_solver::Solver for Solver {
    #[tracing::instrument(skip_all)]
    fn part_1(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.require_pair()?;
        let best = shared.pairs().map(|(a, b)| area(a, b)).max().unwrap_or(0);
        Ok(best.to_string())
    }

    /// Largest rectangle no polygon edge cuts through; edges lying on its
    /// border are fine.
    #[tracing::instrument(skip_all)]
    fn part_2(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.require_pair()?;
        let mut candidates: Vec<(u64, Tile, Tile)> =
            shared.pairs().map(|(a, b)| (area(a, b), a, b)).collect();
        candidates.sort_unstable_by(|x, y| y.0.cmp(&x.0));

        let (checked, best) = candidates
            .iter()
            .enumerate()
            .find(|(_, (_, a, b))| shared.fits_inside(*a, *b))
            .map(|(checked, &(area, _, _))| (checked + 1, area))
            .ok_or_else(|| {
                SolveError::Unsolvable("no rectangle fits inside the loop".to_string())
            })?;
        tracing::debug!(checked, candidates = candidates.len());
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::part_1(&mut shared).unwrap(), "50");
        assert_eq!(Solver::part_2(&mut shared).unwrap(), "24");
    }

    #[test]
    fn test_area_includes_border() {
        assert_eq!(area(Tile { x: 2, y: 5 }, Tile { x: 11, y: 1 }), 50);
        assert_eq!(area(Tile { x: 3, y: 3 }, Tile { x: 3, y: 3 }), 1);
    }

    #[test]
    fn test_border_edges_do_not_block() {
        // A plain square: its own corners give the whole square
        let mut shared = Solver::parse("0,0\n4,0\n4,4\n0,4\n").unwrap();
        assert_eq!(Solver::part_2(&mut shared).unwrap(), "25");
    }

    #[test]
    fn test_notch_blocks_full_rectangle() {
        // U shape; the notch edges cut through the bounding box
        let mut shared = Solver::parse("0,0\n6,0\n6,6\n4,6\n4,2\n2,2\n2,6\n0,6\n").unwrap();
        assert_eq!(Solver::part_1(&mut shared).unwrap(), "49");
        assert_eq!(Solver::part_2(&mut shared).unwrap(), "21");
    }

    #[test]
    fn test_too_few_tiles() {
        let mut shared = Solver::parse("1,1\n").unwrap();
        assert!(matches!(Solver::part_1(&mut shared), Err(SolveError::Unsolvable(_))));
        assert!(matches!(Solver::part_2(&mut shared), Err(SolveError::Unsolvable(_))));
    }

    #[test]
    fn test_diagonal_step_rejected() {
        assert!(matches!(
            Solver::parse("0,0\n3,3\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
