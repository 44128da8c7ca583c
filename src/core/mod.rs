//! Core banking functionality
//!
//! This module contains the domain records (users and accounts), the pure
//! ledger rules for deposits and withdrawals, and statement rendering.

pub mod account;
pub mod ledger;
pub mod monetary;
pub mod statement;
pub mod user;

pub use account::{Account, AccountLimits};
pub use ledger::{
    deposit, withdraw, DepositOutcome, EntryKind, LedgerEntry, WithdrawOutcome, WithdrawRequest,
};
pub use monetary::{
    format_amount, parse_amount, DEFAULT_BRANCH_CODE, DEFAULT_WITHDRAWAL_COUNT_LIMIT,
    DEFAULT_WITHDRAWAL_VALUE_LIMIT,
};
pub use statement::render_statement;
pub use user::User;
