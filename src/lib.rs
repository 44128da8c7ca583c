//! # Checking Ledger - An In-Memory Bank
//!
//! A small checking-account simulator driven from an interactive menu.
//! Everything lives in memory for one run and is gone on exit.
//!
//! ## What It Does
//! - **Users**: registered by personal identifier, unique after stripping
//!   everything but digits
//! - **Accounts**: numbered 1, 2, 3... in opening order and linked to a user
//! - **Ledger**: deposits and withdrawals with a per-withdrawal limit and a
//!   cap on the number of withdrawals
//! - **Statements**: the transaction log plus the current balance
//!
//! ## How the Code Is Organized
//! - `core/`: users, accounts, the deposit/withdraw rules, statements
//! - `storage/`: the in-memory user and account registries
//! - `session/`: one run's state, including the active account
//! - `shell/`: the text menu
//! - `config/`: branch code, limits and log level
//! - `utils/`: identifier normalization and lookup
//! - `cli/`: command-line arguments
//!
//! ## Where to Start
//! 1. `core/ledger.rs` holds the rules and the order they are checked in
//! 2. `session/mod.rs` shows how the shell reaches them
//! 3. `main.rs` wires config, logging and the shell together

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod session;
pub mod shell;
pub mod storage;
pub mod utils;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::Config;
pub use crate::core::{
    deposit, render_statement, withdraw, Account, AccountLimits, EntryKind, LedgerEntry,
    User, WithdrawRequest,
};
pub use error::{BankError, Result};
pub use session::Session;
pub use shell::{MenuCommand, Shell};
pub use storage::{AccountRegistry, UserRegistry, UNKNOWN_OWNER};
pub use utils::{find_user, normalize_id};
