//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Days per event (1-25)
pub const DAYS: usize = 25;

/// Calculate flat index from day, returning None if out of bounds
#[inline]
fn calc_index(day: u8) -> Option<usize> {
    if day == 0 || day as usize > DAYS {
        return None;
    }
    Some((day - 1) as usize)
}

/// Reconstruct day from flat index
#[inline]
fn from_index(index: usize) -> u8 {
    index as u8 + 1
}

// ============================================================================
// Factory Types
// ============================================================================

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Builder for constructing a SolverRegistry with fluent API
///
/// Registration is explicit: every day is listed by hand, and a second
/// registration for the same day is rejected.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Echo {
///     fn part_1(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
///
///     fn part_2(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register_solver::<Echo>(1)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(1, " hello ").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hello");
/// assert_eq!(solver.solve(2).unwrap().answer, "5");
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<SolverFactory>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..DAYS).map(|_| None).collect(),
        }
    }

    /// Register a solver factory function for a specific day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Day out of range or already registered
    pub fn register<F>(mut self, day: u8, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(day).ok_or(RegistrationError::InvalidDay(day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(day));
        }

        self.entries[index] = Some(Box::new(factory));
        Ok(self)
    }

    /// Register a [`Solver`] type for a specific day
    ///
    /// The generated factory parses the input once into a [`SolverInstance`].
    pub fn register_solver<S>(self, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register(day, move |input: &str| {
            let instance = SolverInstance::<S>::new(day, input)?;
            Ok(Box::new(instance) as Box<dyn DynSolver + '_>)
        })
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry mapping day numbers to solver factories
pub struct SolverRegistry {
    entries: Vec<Option<SolverFactory>>,
}

impl SolverRegistry {
    /// Days that have a registered solver, in ascending order
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_some())
            .map(|(i, _)| from_index(i))
    }

    /// Check if a solver exists for the day
    pub fn contains(&self, day: u8) -> bool {
        calc_index(day)
            .and_then(|i| self.entries.get(i))
            .is_some_and(Option::is_some)
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if no solver is registered
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }

    /// Create a solver instance for a specific day, parsing `input`
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Day invalid, solver not found or parsing failed
    pub fn create_solver<'a>(
        &self,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(day).ok_or(SolverError::InvalidDay(day))?;

        let factory = self
            .entries
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(SolverError::NotFound(day))?;

        factory(input).map_err(SolverError::ParseError)
    }
}
