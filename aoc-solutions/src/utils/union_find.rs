//! Disjoint-set forest with path halving and union by size.

/// A partition of `0..n` into disjoint components.
///
/// `parent[x] == x` iff `x` is the representative of its component, and
/// `size[r]` is only meaningful when `r` is a representative. The sizes of
/// all representatives always sum to `n`.
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSetForest {
    /// Create `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Number of elements in the forest.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Current number of disjoint sets.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Representative of the component containing `x`.
    ///
    /// Every visited node is pointed at its grandparent on the way up.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.len()`.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merge the components of `x` and `y`.
    ///
    /// Returns `false` without touching anything when they already share a
    /// component. Otherwise the smaller root goes under the larger one (on a
    /// tie, `y`'s root under `x`'s) and the component count drops by one.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let mut root_x = self.find(x);
        let mut root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        if self.size[root_x] < self.size[root_y] {
            std::mem::swap(&mut root_x, &mut root_y);
        }
        self.parent[root_y] = root_x;
        self.size[root_x] += self.size[root_y];
        self.components -= 1;
        true
    }

    /// Size of the component whose representative is `representative`.
    ///
    /// Only meaningful for a value returned by [`find`](Self::find).
    pub fn size_of(&self, representative: usize) -> usize {
        debug_assert_eq!(self.parent[representative], representative);
        self.size[representative]
    }

    /// Whether `x` and `y` share a component.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Sizes of all components, one entry per representative, in index order.
    pub fn component_sizes(&self) -> Vec<usize> {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(x, &p)| x == p)
            .map(|(x, _)| self.size[x])
            .collect()
    }
}
