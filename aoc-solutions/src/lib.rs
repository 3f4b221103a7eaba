//! Advent of Code 2025 puzzle solutions
//!
//! Each day lives in [`year_2025`] and implements the
//! [`aoc_solver::Solver`] contract. [`register_all`] lists every day
//! explicitly; [`registry`] builds the ready-to-use lookup table.
//!
//! ```
//! let registry = aoc_solutions::registry().unwrap();
//! let mut solver = registry.create_solver(5, "3-5\n10-14\n\n4\n11\n20\n").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "2");
//! assert_eq!(solver.solve(2).unwrap().answer, "8");
//! ```

use aoc_solver::{RegistrationError, RegistryBuilder, SolverRegistry};

pub mod utils;
pub mod year_2025;

/// Register every implemented day with `builder`
pub fn register_all(builder: RegistryBuilder) -> Result<RegistryBuilder, RegistrationError> {
    use year_2025::*;

    builder
        .register_solver::<day_1::Solver>(1)?
        .register_solver::<day_2::Solver>(2)?
        .register_solver::<day_3::Solver>(3)?
        .register_solver::<day_4::Solver>(4)?
        .register_solver::<day_5::Solver>(5)?
        .register_solver::<day_6::Solver>(6)?
        .register_solver::<day_7::Solver>(7)?
        .register_solver::<day_8::Solver>(8)?
        .register_solver::<day_9::Solver>(9)?
        .register_solver::<day_10::Solver>(10)?
        .register_solver::<day_11::Solver>(11)?
        .register_solver::<day_12::Solver>(12)
}

/// Build the registry holding every implemented day
pub fn registry() -> Result<SolverRegistry, RegistrationError> {
    Ok(register_all(RegistryBuilder::new())?.build())
}
