//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::{ClosureProblem, DpProblem};

/// Error returned when a value cannot be resolved
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DpError {
    /// An index (transitively) depends on itself
    #[error("dependency cycle detected")]
    Cycle,
}

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// `DpCache` provides memoization for recursive computations where values may depend
/// on other values. Dependencies are resolved automatically and each value is computed
/// exactly once. An index that is reached again while its own dependencies are still
/// being resolved makes [`get`](Self::get) fail with [`DpError::Cycle`].
///
/// # Example (builder)
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
///
/// struct Factorial;
///
/// impl DpProblem<usize, u64> for Factorial {
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n == 0 { vec![] } else { vec![n - 1] }
///     }
///     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
///         if *n == 0 { 1 } else { (*n as u64) * deps[0] }
///     }
/// }
///
/// let cache = DpCache::builder()
///     .backend(VecBackend::new())
///     .problem(Factorial)
///     .build();
/// assert_eq!(cache.get(&5).unwrap(), 120);
/// ```
///
/// # Example (closure-based)
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{DpCache, VecBackend};
///
/// let cache = DpCache::new(
///     VecBackend::new(),
///     |n: &usize| if *n == 0 { vec![] } else { vec![n - 1] },
///     |n: &usize, deps: Vec<u64>| {
///         if *n == 0 { 1 } else { (*n as u64) * deps[0] }
///     },
/// );
///
/// assert_eq!(cache.get(&5).unwrap(), 120);
/// ```
pub struct DpCache<I, K, B, P> {
    backend: RefCell<B>,
    in_progress: RefCell<HashSet<I>>,
    problem: P,
    _phantom: PhantomData<K>,
}

/// Builder returned by [`DpCache::builder`]
pub struct DpCacheBuilder<B, P> {
    backend: B,
    problem: P,
}

impl DpCache<(), (), (), ()> {
    /// Start building a cache; set a backend and a problem, then `build()`
    pub fn builder() -> DpCacheBuilder<(), ()> {
        DpCacheBuilder {
            backend: (),
            problem: (),
        }
    }
}

impl<B, P> DpCacheBuilder<B, P> {
    pub fn backend<B2>(self, backend: B2) -> DpCacheBuilder<B2, P> {
        DpCacheBuilder {
            backend,
            problem: self.problem,
        }
    }

    pub fn problem<P2>(self, problem: P2) -> DpCacheBuilder<B, P2> {
        DpCacheBuilder {
            backend: self.backend,
            problem,
        }
    }

    pub fn build<I, K>(self) -> DpCache<I, K, B, P>
    where
        I: Clone + Eq + Hash,
        K: Clone,
        B: Backend<I, K>,
        P: DpProblem<I, K>,
    {
        DpCache::with_problem(self.backend, self.problem)
    }
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone + Eq + Hash,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Creates a new DpCache with the given backend and problem definition.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            in_progress: RefCell::new(HashSet::new()),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Gets the value for the given index, computing it if necessary.
    ///
    /// If the value is already cached, returns a clone. Otherwise resolves all
    /// dependencies recursively, computes the value, caches it and returns a clone.
    pub fn get(&self, index: &I) -> Result<K, DpError> {
        if let Some(value) = self.backend.borrow().get(index) {
            return Ok(value.clone());
        }

        if !self.in_progress.borrow_mut().insert(index.clone()) {
            return Err(DpError::Cycle);
        }
        let deps: Result<Vec<K>, DpError> = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect();
        self.in_progress.borrow_mut().remove(index);

        let value = self.problem.compute(index, deps?);
        self.backend.borrow_mut().insert(index.clone(), value.clone());
        Ok(value)
    }
}

impl<I, K, B, D, C> DpCache<I, K, B, ClosureProblem<I, K, D, C>>
where
    I: Clone + Eq + Hash,
    K: Clone,
    B: Backend<I, K>,
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    /// Creates a new DpCache from a dependency function and a compute function.
    pub fn new(backend: B, dep_fn: D, compute_fn: C) -> Self {
        Self::with_problem(backend, ClosureProblem::new(dep_fn, compute_fn))
    }
}
