pub mod checkpatch;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod git;
pub mod hook;
pub mod router;

pub use error::{GateError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
