//! Advent of Code Solver Library
//!
//! A small, type-safe framework for the 2025 puzzle solvers. Each day is a
//! solver with its own input parsing that produces answers for two parts.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers ([`AocParser`] + [`Solver`])
//! - Parse-once instances shared by both parts ([`SolverInstance`])
//! - An explicit day registry ([`RegistryBuilder`] / [`SolverRegistry`])
//! - Error types for parsing, solving and registration
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
//!
//! pub struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for MyDay1 {
//!     fn part_1(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//!
//!     fn part_2(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<MyDay1>(1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(1, "1\n2\n3").unwrap();
//! let solution = solver.solve_all().unwrap();
//! assert_eq!(solution.part_1.answer, "6");
//! assert_eq!(solution.part_2.answer, "3");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, Solution, SolveResult, SolverInstance};
pub use registry::{DAYS, RegistryBuilder, SolverFactory, SolverRegistry};
pub use solver::{AocParser, PARTS, Solver};
