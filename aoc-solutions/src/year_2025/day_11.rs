//! Day 11: counting paths through the reactor's device graph

use crate::utils::dp_cache::{DpCache, DpError, VecBackend};
use aoc_solver::{AocParser, ParseError, SolveError};
use std::collections::{HashMap, HashSet};

const OUT: &str = "out";

pub struct Solver;

/// Devices interned to dense indices, names borrowed from the input
#[derive(Debug, Default)]
pub struct Devices<'a> {
    ids: HashMap<&'a str, usize>,
    outputs: Vec<Vec<usize>>,
}

impl<'a> Devices<'a> {
    fn intern(&mut self, name: &'a str) -> usize {
        *self.ids.entry(name).or_insert_with(|| {
            self.outputs.push(Vec::new());
            self.outputs.len() - 1
        })
    }

    fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Paths from `from` to [`OUT`] that pass through every device in
    /// `required`.
    ///
    /// Memoised over `(device, required devices seen so far)`.
    pub fn count_paths(&self, from: &str, required: &[&str]) -> Result<u64, SolveError> {
        let start = self
            .id(from)
            .ok_or_else(|| SolveError::Unsolvable(format!("no device named {from:?}")))?;
        let target = self.id(OUT);

        let required: Vec<Option<usize>> = required.iter().map(|name| self.id(name)).collect();
        let states = 1usize << required.len();
        let all_seen = states - 1;
        let mark = |device: usize| -> usize {
            required
                .iter()
                .enumerate()
                .filter(|&(_, &r)| r == Some(device))
                .fold(0, |mask, (bit, _)| mask | 1 << bit)
        };

        let cache = DpCache::new(
            VecBackend::with_capacity(self.outputs.len() * states),
            |&index: &usize| {
                let (device, seen) = (index / states, index % states);
                if Some(device) == target {
                    return Vec::new();
                }
                self.outputs[device]
                    .iter()
                    .map(|&next| next * states + (seen | mark(next)))
                    .collect()
            },
            |&index: &usize, deps: Vec<u64>| {
                let (device, seen) = (index / states, index % states);
                if Some(device) == target {
                    u64::from(seen == all_seen)
                } else {
                    deps.iter().sum()
                }
            },
        );

        cache
            .get(&(start * states + mark(start)))
            .map_err(|DpError::Cycle| {
                SolveError::Unsolvable(format!("device graph has a cycle reachable from {from:?}"))
            })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Devices<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut devices = Devices::default();
        let mut listed = HashSet::new();

        for (index, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((source, outputs)) = line.split_once(':') else {
                return Err(ParseError::invalid_line(index, line, "missing ':'"));
            };
            let source = source.trim();
            if source.is_empty() || source.contains(char::is_whitespace) {
                return Err(ParseError::invalid_line(index, line, "bad device name"));
            }

            let id = devices.intern(source);
            if !listed.insert(id) {
                return Err(ParseError::invalid_line(
                    index,
                    line,
                    format!("device {source:?} listed twice"),
                ));
            }

            let targets: Vec<usize> = outputs
                .split_whitespace()
                .map(|name| devices.intern(name))
                .collect();
            devices.outputs[id] = targets;
        }

        tracing::debug!(devices = devices.outputs.len(), listed = listed.len());
        Ok(devices)
    }
}

impl aoc_solver::Solver for Solver {
    #[tracing::instrument(skip_all)]
    fn part_1(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_paths("you", &[])?.to_string())
    }

    #[tracing::instrument(skip_all)]
    fn part_2(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_paths("svr", &["dac", "fft"])?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE_1: &str = "aaa: you hhh
you: bbb ccc
bbb: ddd eee
ccc: ddd eee fff
ddd: ggg
eee: out
fff: out
ggg: out
hhh: ccc fff iii
iii: out
";

    const EXAMPLE_2: &str = "svr: aaa bbb
aaa: fft
fft: ccc
bbb: tty
tty: ccc
ccc: ddd eee
ddd: hub
hub: fff
eee: dac
dac: fff
fff: ggg hhh
ggg: out
hhh: out
";

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_1).unwrap();
        assert_eq!(Solver::part_1(&mut shared).unwrap(), "5");

        let mut shared = Solver::parse(EXAMPLE_2).unwrap();
        assert_eq!(Solver::part_2(&mut shared).unwrap(), "2");
        // Without the requirement every route counts
        assert_eq!(shared.count_paths("svr", &[]).unwrap(), 8);
    }

    #[test]
    fn test_missing_start() {
        let mut shared = Solver::parse(EXAMPLE_1).unwrap();
        assert!(matches!(Solver::part_2(&mut shared), Err(SolveError::Unsolvable(_))));
    }

    #[test]
    fn test_missing_required_device_means_no_paths() {
        let shared = Solver::parse("svr: dac\ndac: out\n").unwrap();
        assert_eq!(shared.count_paths("svr", &["dac", "fft"]).unwrap(), 0);
        assert_eq!(shared.count_paths("svr", &["dac"]).unwrap(), 1);
    }

    #[test]
    fn test_cycle_reported() {
        let mut shared = Solver::parse("you: a\na: b\nb: a out\n").unwrap();
        let err = Solver::part_1(&mut shared).unwrap_err();
        assert!(matches!(err, SolveError::Unsolvable(_)));
        assert!(err.to_string().contains("cycle"), "{err}");
    }

    #[test]
    fn test_start_can_be_required() {
        let shared = Solver::parse("fft: a b\na: out\nb: out\n").unwrap();
        assert_eq!(shared.count_paths("fft", &["fft"]).unwrap(), 2);
    }

    #[test]
    fn test_malformed_lines() {
        let err = Solver::parse("you: out\nbroken line\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 2, .. }));
        let err = Solver::parse("you: a\nyou: b\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 2, .. }));
    }
}
