//! Command implementations

pub mod benchmark;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use solve::{SolveResult, solve_pair};
