//! Command-line interface for the nomina binary.
//!
//! Argument parsing and command routing; individual command
//! implementations live in the `commands` submodule.

pub mod commands;
pub mod output;
pub mod parser;

pub use output::*;
pub use parser::*;
