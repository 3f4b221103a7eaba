//! Junction box positions and the pairwise distance edges between them

/// A junction box, identified elsewhere by its index in input order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Exact squared Euclidean distance
    pub fn squared_distance(&self, other: &Point) -> u128 {
        let axis = |a: i32, b: i32| u128::from(a.abs_diff(b)).pow(2);
        axis(self.x, other.x) + axis(self.y, other.y) + axis(self.z, other.z)
    }
}

/// A candidate connection; always `i > j`.
///
/// Ordering is by weight, then by the indices, so edges of equal length are
/// still processed in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub weight: u128,
    pub i: usize,
    pub j: usize,
}

/// One edge per unordered pair of `points`, in no particular order.
pub fn generate_edges(points: &[Point]) -> Vec<Edge> {
    let n = points.len();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (i, a) in points.iter().enumerate() {
        for (j, b) in points[..i].iter().enumerate() {
            edges.push(Edge {
                weight: a.squared_distance(b),
                i,
                j,
            });
        }
    }
    edges
}
