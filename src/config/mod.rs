//! Configuration management
//!
//! This module handles the settings that shape new accounts: the branch code
//! and the default withdrawal limits, plus the log level.
//!
//! Settings come from built-in defaults, an optional TOML file, `BANK_*`
//! environment variables and command-line flags, in increasing precedence.

pub mod settings;

pub use settings::Config;
