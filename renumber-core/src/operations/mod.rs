//! High-level operations that correspond to CLI commands
//!
//! Separated from CLI concerns like argument parsing and output formatting.

pub mod run;

pub use run::{run_operation, RunOptions};
