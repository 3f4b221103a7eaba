//! Day 8: wiring junction boxes into circuits
//!
//! Every pair of boxes is a candidate connection weighted by squared
//! distance. Part 1 connects the closest [`DEFAULT_PAIRS`] pairs and
//! multiplies the three largest circuit sizes; part 2 keeps connecting until
//! a single circuit remains and multiplies the `x` coordinates of the pair
//! that closed it.

mod edges;
mod selector;

pub use edges::{Edge, Point, generate_edges};
pub use selector::{ClusterError, DEFAULT_PAIRS, connect_all, connect_closest};

use crate::utils::parse::{numbers, parse_lines};
use aoc_solver::{AocParser, ParseError, SolveError};

pub struct Solver;

/// Parsed boxes plus every candidate connection, built once for both parts
#[derive(Debug, Clone)]
pub struct Playground {
    points: Vec<Point>,
    edges: Vec<Edge>,
    pairs: usize,
}

impl Playground {
    pub fn new(points: Vec<Point>) -> Self {
        let edges = generate_edges(&points);
        Self {
            points,
            edges,
            pairs: DEFAULT_PAIRS,
        }
    }

    /// Connect `pairs` pairs in part 1 instead of [`DEFAULT_PAIRS`]
    pub fn with_pairs(mut self, pairs: usize) -> Self {
        self.pairs = pairs;
        self
    }

    pub fn circuit_product(&self) -> Result<u64, ClusterError> {
        connect_closest(self.points.len(), &self.edges, self.pairs)
    }

    pub fn closing_product(&self) -> Result<i64, ClusterError> {
        let last = connect_all(self.points.len(), &self.edges)?;
        Ok(i64::from(self.points[last.i].x) * i64::from(self.points[last.j].x))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Playground;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let points = parse_lines(input, |line| {
            let [x, y, z] = numbers::<i32, 3>(line, ',')?;
            Ok(Point::new(x, y, z))
        })?;
        let playground = Playground::new(points);
        tracing::debug!(
            points = playground.points.len(),
            edges = playground.edges.len()
        );
        Ok(playground)
    }
}

impl aoc_solver::Solver for Solver {
    #[tracing::instrument(skip_all)]
    fn part_1(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product = shared.circuit_product().map_err(SolveError::failed)?;
        Ok(product.to_string())
    }

    #[tracing::instrument(skip_all)]
    fn part_2(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product = shared.closing_product().map_err(SolveError::failed)?;
        Ok(product.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap().with_pairs(10);
        assert_eq!(Solver::part_1(&mut shared).unwrap(), "40");
        assert_eq!(Solver::part_2(&mut shared).unwrap(), "25272");
    }

    #[test]
    fn test_repeat_solve_is_identical() {
        let mut first = Solver::parse(EXAMPLE).unwrap().with_pairs(10);
        let mut second = Solver::parse(EXAMPLE).unwrap().with_pairs(10);
        for part in 1..=2 {
            let a = Solver::solve_part(&mut first, part).unwrap();
            let b = Solver::solve_part(&mut second, part).unwrap();
            assert_eq!(a, b);
            assert_eq!(a, Solver::solve_part(&mut first, part).unwrap());
        }
    }

    #[test]
    fn test_default_pairs_cover_small_input() {
        // 190 edges is fewer than the default, so everything joins up
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        let err = Solver::part_1(&mut shared).unwrap_err();
        assert!(matches!(err, SolveError::SolveFailed(_)));
        assert!(err.to_string().contains("found 1"), "{err}");
    }

    #[test]
    fn test_single_point_is_disconnected() {
        let mut shared = Solver::parse("1,2,3\n").unwrap();
        let err = Solver::part_2(&mut shared).unwrap_err();
        assert!(matches!(err, SolveError::SolveFailed(_)));
    }

    #[test]
    fn test_closing_pair_may_be_negative() {
        let mut shared = Solver::parse("-3,0,0\n0,0,0\n7,0,0\n").unwrap();
        // (-3,0) joins first, then 7 reaches 0
        assert_eq!(Solver::part_2(&mut shared).unwrap(), "0");
        let playground = Solver::parse("-3,0,0\n-1,0,0\n9,0,0\n").unwrap();
        assert_eq!(playground.closing_product(), Ok(-9));
    }

    #[test]
    fn test_malformed_lines() {
        for (input, line) in [("1,2,3\n4,5\n", 2), ("1,2,3\n\n1,2,x\n", 3), ("1,2,3,4\n", 1)] {
            match Solver::parse(input) {
                Err(ParseError::InvalidLine { line: got, .. }) => assert_eq!(got, line, "{input:?}"),
                other => panic!("{input:?} gave {other:?}"),
            }
        }
    }
}
