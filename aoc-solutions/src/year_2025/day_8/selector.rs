//! Choosing which edges to connect, smallest first

use super::edges::Edge;
use crate::utils::union_find::DisjointSetForest;
use itertools::Itertools;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Connections made before measuring circuits, unless overridden
pub const DEFAULT_PAIRS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClusterError {
    #[error("need at least 3 circuits to multiply, found {found}")]
    InsufficientComponents { found: usize },
    #[error("{points} junction boxes never join into a single circuit")]
    DisconnectedInput { points: usize },
}

/// Connect the `pairs` shortest edges among `n` points and multiply the
/// sizes of the three largest resulting circuits.
///
/// Uses every edge when fewer than `pairs` exist.
pub fn connect_closest(n: usize, edges: &[Edge], pairs: usize) -> Result<u64, ClusterError> {
    let mut closest = edges.to_vec();
    if pairs < closest.len() {
        closest.select_nth_unstable(pairs);
        closest.truncate(pairs);
    }
    closest.sort_unstable();

    let mut forest = DisjointSetForest::new(n);
    let merges = closest
        .iter()
        .filter(|edge| forest.union(edge.i, edge.j))
        .count();
    tracing::debug!(edges = closest.len(), merges, circuits = forest.components());

    let sizes = forest.component_sizes();
    if sizes.len() < 3 {
        return Err(ClusterError::InsufficientComponents { found: sizes.len() });
    }
    Ok(sizes.into_iter().k_largest(3).map(|s| s as u64).product())
}

/// Connect edges in increasing order until all `n` points form one circuit,
/// returning the edge whose union completed it.
pub fn connect_all(n: usize, edges: &[Edge]) -> Result<Edge, ClusterError> {
    if n < 2 {
        return Err(ClusterError::DisconnectedInput { points: n });
    }

    let mut forest = DisjointSetForest::new(n);
    let mut queue: BinaryHeap<Reverse<Edge>> = edges.iter().copied().map(Reverse).collect();
    let mut popped = 0usize;

    while let Some(Reverse(edge)) = queue.pop() {
        popped += 1;
        if forest.union(edge.i, edge.j) && forest.components() == 1 {
            tracing::debug!(popped, "single circuit");
            return Ok(edge);
        }
    }
    Err(ClusterError::DisconnectedInput { points: n })
}
