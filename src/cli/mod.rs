//! Command-line interface
//!
//! Argument parsing for the bank binary.

pub mod commands;

pub use commands::{Command, Opt};
