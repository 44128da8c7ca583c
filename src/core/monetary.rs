//! Monetary defaults and helpers
//!
//! Amounts are `Decimal` so that 0.10 + 0.20 is exactly 0.30. Every account
//! starts from these defaults unless the configuration overrides them.
//!
//! ## Defaults
//! - **Branch**: "0001"
//! - **Per-withdrawal limit**: 500.00
//! - **Withdrawals per account**: 3

use crate::error::{BankError, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Branch code assigned to new accounts
pub const DEFAULT_BRANCH_CODE: &str = "0001";

/// Maximum amount of a single withdrawal (500.00)
pub const DEFAULT_WITHDRAWAL_VALUE_LIMIT: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Number of withdrawals an account may perform
pub const DEFAULT_WITHDRAWAL_COUNT_LIMIT: u32 = 3;

/// Prefix used when printing amounts
pub const CURRENCY_SYMBOL: &str = "R$";

/// Format an amount for display
///
/// # Examples
/// ```
/// use checking_ledger::core::monetary::format_amount;
/// use rust_decimal::Decimal;
/// assert_eq!(format_amount(Decimal::new(1050, 1)), "R$ 105.00");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    format!("{CURRENCY_SYMBOL} {amount:.2}")
}

/// Parse an amount typed by the operator.
///
/// Accepts either '.' or ',' as the decimal separator. Sign is kept so the
/// ledger can reject non-positive amounts itself.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let cleaned = input.trim().replace(',', ".");
    Decimal::from_str(&cleaned)
        .map_err(|_| BankError::InvalidInput(format!("{:?} is not a valid amount", input.trim())))
}
