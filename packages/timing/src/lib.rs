//! Call timing for plain functions.
//!
//! [`timed`] wraps a function so every call prints a line like
//! `took [0.00000260s] arithmetic_series(0, 1000000, 3) -> 166666833333`.
//! [`timed_runs`] repeats the call a fixed number of times and prints the
//! total once. Wrapped functions take their arguments as a tuple.

pub mod args;
pub mod report;
pub mod timed;

pub use args::Args;
pub use report::{Report, print_report};
pub use timed::{TimedRuns, timed, timed_runs, timed_with};
