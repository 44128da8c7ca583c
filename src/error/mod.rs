//! Error handling for the bank
//!
//! Every failure a registry or ledger operation can produce is a variant here.
//! None of them are fatal: the shell reports the message and re-prompts.

use rust_decimal::Decimal;
use std::fmt;

/// Result type alias for bank operations
pub type Result<T> = std::result::Result<T, BankError>;

/// Error types for registry, ledger and shell operations
#[derive(Debug, Clone, PartialEq)]
pub enum BankError {
    /// Identifier has no digits left after normalization (holds the raw input)
    InvalidIdentifier(String),
    /// A user with this normalized identifier is already registered
    DuplicateUser(String),
    /// No user matches the normalized identifier
    UserNotFound(String),
    /// No account carries this number
    AccountNotFound(u32),
    /// Non-positive amount given to deposit or withdraw
    InvalidAmount(Decimal),
    /// Deposit that would push the balance past the largest representable amount
    BalanceOverflow { balance: Decimal, amount: Decimal },
    /// Withdrawal larger than the current balance
    InsufficientFunds { requested: Decimal, available: Decimal },
    /// Withdrawal larger than the per-transaction limit
    LimitExceeded { requested: Decimal, limit: Decimal },
    /// The account already used all of its withdrawals
    WithdrawalCountExceeded { limit: u32 },
    /// Deposit, withdraw or statement requested with no account selected
    NoActiveAccount,
    /// Operator input that could not be parsed
    InvalidInput(String),
    /// Configuration errors
    Config(String),
    /// I/O errors
    Io(String),
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankError::InvalidIdentifier(raw) => write!(f, "Invalid identifier: {raw:?}"),
            BankError::DuplicateUser(id) => {
                write!(f, "A user with identifier {id} already exists")
            }
            BankError::UserNotFound(id) => write!(f, "No user found with identifier {id:?}"),
            BankError::AccountNotFound(number) => write!(f, "Account {number} not found"),
            BankError::InvalidAmount(amount) => write!(f, "Invalid amount: {amount}"),
            BankError::BalanceOverflow { balance, amount } => {
                write!(
                    f,
                    "Deposit of {amount} would overflow the balance of {balance}"
                )
            }
            BankError::InsufficientFunds {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Insufficient funds: requested {requested:.2}, available {available:.2}"
                )
            }
            BankError::LimitExceeded { requested, limit } => {
                write!(
                    f,
                    "Withdrawal of {requested:.2} exceeds the per-transaction limit of {limit:.2}"
                )
            }
            BankError::WithdrawalCountExceeded { limit } => {
                write!(f, "Maximum number of withdrawals reached ({limit})")
            }
            BankError::NoActiveAccount => write!(f, "No active account selected"),
            BankError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            BankError::Config(msg) => write!(f, "Configuration error: {msg}"),
            BankError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for BankError {}

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        BankError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for BankError {
    fn from(err: toml::de::Error) -> Self {
        BankError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for BankError {
    fn from(err: toml::ser::Error) -> Self {
        BankError::Config(err.to_string())
    }
}
