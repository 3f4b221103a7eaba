//! Sorted, non-overlapping sets of inclusive integer intervals

/// An inclusive interval `start..=end` with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Interval {
    pub start: u64,
    pub end: u64,
}

impl Interval {
    /// Build an interval, rejecting `start > end`
    pub fn new(start: u64, end: u64) -> anyhow::Result<Self> {
        anyhow::ensure!(start <= end, "interval start {start} is after its end {end}");
        Ok(Self { start, end })
    }

    /// Number of integers in the interval
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    pub fn contains(&self, value: u64) -> bool {
        self.start <= value && value <= self.end
    }
}

/// Overlapping intervals merged into a sorted, disjoint list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Sort `intervals` and merge every pair that overlaps.
    pub fn merge(intervals: impl IntoIterator<Item = Interval>) -> Self {
        let mut sorted: Vec<Interval> = intervals.into_iter().collect();
        sorted.sort_unstable();

        let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
        for interval in sorted {
            match merged.last_mut() {
                Some(last) if interval.start <= last.end => {
                    last.end = last.end.max(interval.end);
                }
                _ => merged.push(interval),
            }
        }
        Self { intervals: merged }
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Binary search for the interval holding `value`
    pub fn contains(&self, value: u64) -> bool {
        let i = self.intervals.partition_point(|interval| interval.end < value);
        self.intervals
            .get(i)
            .is_some_and(|interval| interval.contains(value))
    }

    /// Total number of integers covered
    pub fn covered(&self) -> u64 {
        self.intervals.iter().map(Interval::len).sum()
    }

    /// Largest covered value
    pub fn max(&self) -> Option<u64> {
        self.intervals.last().map(|interval| interval.end)
    }
}
