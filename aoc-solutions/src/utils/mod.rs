//! Shared building blocks for the daily solvers

pub mod dp_cache;
pub mod grid;
pub mod intervals;
pub mod parse;
pub mod union_find;
