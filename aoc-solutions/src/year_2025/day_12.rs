//! Day 12: packing presents under christmas trees

use crate::utils::parse::{number, numbers, split_once};
use aoc_solver::{AocParser, ParseError, SolveError};

/// Every present fits inside a square of this side
const SLOT: u64 = 3;

pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    width: u64,
    height: u64,
    counts: Vec<u64>,
}

impl Region {
    /// Whether each present can get a slot of its own
    fn fits_in_slots(&self) -> bool {
        (self.width / SLOT) * (self.height / SLOT) >= self.counts.iter().sum()
    }

    /// Whether the presents' cells alone already exceed the area
    fn overfilled(&self, shape_cells: &[u64]) -> bool {
        let needed: u64 = self.counts.iter().zip(shape_cells).map(|(c, s)| c * s).sum();
        needed > self.width * self.height
    }
}

#[derive(Debug, Default)]
pub struct Farm {
    /// Occupied cells of each present shape, by index
    shape_cells: Vec<u64>,
    regions: Vec<Region>,
}

impl AocParser for Solver {
    type SharedData<'a> = Farm;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut farm = Farm::default();
        let mut in_shape = false;

        for (index, line) in input.lines().enumerate() {
            let line = line.trim();
            let invalid = |reason: String| ParseError::invalid_line(index, line, reason);

            if line.is_empty() {
                in_shape = false;
            } else if line.contains('x') {
                let region = parse_region(line).map_err(|e| invalid(format!("{e:#}")))?;
                if !farm.shape_cells.is_empty() && region.counts.len() != farm.shape_cells.len() {
                    return Err(invalid(format!(
                        "{} counts for {} shapes",
                        region.counts.len(),
                        farm.shape_cells.len()
                    )));
                }
                farm.regions.push(region);
            } else if let Some(label) = line.strip_suffix(':') {
                let shape: usize = number(label).map_err(|e| invalid(format!("{e:#}")))?;
                if shape != farm.shape_cells.len() {
                    return Err(invalid(format!(
                        "expected shape {}, found {shape}",
                        farm.shape_cells.len()
                    )));
                }
                farm.shape_cells.push(0);
                in_shape = true;
            } else if in_shape && line.bytes().all(|b| matches!(b, b'#' | b'.')) {
                if let Some(cells) = farm.shape_cells.last_mut() {
                    *cells += line.bytes().filter(|&b| b == b'#').count() as u64;
                }
            } else {
                return Err(invalid("not a shape row or a region".to_string()));
            }
        }

        if farm.regions.is_empty() {
            return Err(ParseError::MissingData("no regions under the trees".to_string()));
        }
        Ok(farm)
    }
}

fn parse_region(line: &str) -> anyhow::Result<Region> {
    let (size, counts) = split_once(line, ":")?;
    let [width, height] = numbers::<u64, 2>(size, 'x')?;
    let counts = counts
        .split_whitespace()
        .map(number)
        .collect::<anyhow::Result<Vec<u64>>>()?;
    Ok(Region {
        width,
        height,
        counts,
    })
}

impl aoc_solver::Solver for Solver {
    #[tracing::instrument(skip_all)]
    fn part_1(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fitting = shared.regions.iter().filter(|r| r.fits_in_slots()).count();
        let undecided = shared
            .regions
            .iter()
            .filter(|r| !r.fits_in_slots() && !r.overfilled(&shared.shape_cells))
            .count();
        tracing::debug!(fitting, undecided, regions = shared.regions.len());
        Ok(fitting.to_string())
    }

    /// The last day has no second puzzle
    fn part_2(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SHAPES: &str = "0:
###
##.
##.

1:
###
##.
.##

";

    #[test]
    fn test_slot_count() {
        let input = format!("{SHAPES}6x6: 2 2\n6x6: 3 2\n7x8: 2 2\n9x3: 3 0\n");
        let mut shared = Solver::parse(&input).unwrap();
        assert_eq!(shared.shape_cells, vec![7, 7]);
        assert_eq!(Solver::part_1(&mut shared).unwrap(), "3");
        assert_eq!(Solver::part_2(&mut shared).unwrap(), "");
    }

    #[test]
    fn test_regions_without_shapes() {
        let mut shared = Solver::parse("3x3: 1\n2x9: 1\n").unwrap();
        assert_eq!(Solver::part_1(&mut shared).unwrap(), "1");
    }

    #[test]
    fn test_overfilled() {
        let region = Region {
            width: 4,
            height: 4,
            counts: vec![1, 2],
        };
        assert!(region.overfilled(&[7, 7]));
        assert!(!region.overfilled(&[7, 1]));
    }

    #[test]
    fn test_malformed_input() {
        let count_mismatch = format!("{SHAPES}4x4: 1\n");
        let err = Solver::parse(&count_mismatch).unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 11, .. }));

        let err = Solver::parse("0:\n#x#\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 2, .. }));
        let err = Solver::parse("1:\n###\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 1, .. }));
        let err = Solver::parse("4by4: 1\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 1, .. }));
        assert!(matches!(Solver::parse(SHAPES), Err(ParseError::MissingData(_))));
    }
}
