//! Memoization cache for dynamic programming over a dependency graph
//!
//! A [`DpProblem`] names, for every index, the indices it depends on and how
//! to combine their values. [`DpCache`] resolves those dependencies lazily,
//! computes each value once and keeps it in a [`Backend`].
//!
//! # Backend Types
//!
//! - [`VecBackend`]: dense `usize` indices, grows on demand
//! - [`HashMapBackend`]: arbitrary hashable indices
//!
//! # Cycles
//!
//! Dependencies are expected to form a DAG. When an index is reached again
//! while it is still being resolved, [`DpCache::get`] returns
//! [`DpError::Cycle`] instead of recursing forever.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, HashMapBackend};
//!
//! // Paths from "a" to "d" in a small diamond graph
//! let cache = DpCache::new(
//!     HashMapBackend::new(),
//!     |node: &&str| match *node {
//!         "a" => vec!["b", "c"],
//!         "b" | "c" => vec!["d"],
//!         _ => vec![],
//!     },
//!     |node: &&str, deps: Vec<u64>| if *node == "d" { 1 } else { deps.iter().sum() },
//! );
//!
//! assert_eq!(cache.get(&"a").unwrap(), 2);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{DpCache, DpCacheBuilder, DpError};
pub use problem::{ClosureProblem, DpProblem};

#[cfg(test)]
mod tests;
