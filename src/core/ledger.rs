//! Deposit and withdrawal rules
//!
//! Both operations are pure: they take the financial state by value and either
//! return the next state or a rejection. Nothing is mutated here, so a rejected
//! operation can never leave an account half-updated. `Account` commits the
//! outcome.

use crate::core::monetary::format_amount;
use crate::error::{BankError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Deposit,
    Withdrawal,
}

/// One line of an account's transaction log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub kind: EntryKind,
    pub amount: Decimal,
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            EntryKind::Deposit => "Deposit",
            EntryKind::Withdrawal => "Withdrawal",
        };
        write!(f, "{label}: {}", format_amount(self.amount))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepositOutcome {
    pub new_balance: Decimal,
    pub entry: LedgerEntry,
}

/// Everything the withdrawal rules look at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithdrawRequest {
    pub balance: Decimal,
    pub amount: Decimal,
    pub per_transaction_limit: Decimal,
    pub withdrawal_count: u32,
    pub withdrawal_count_limit: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawOutcome {
    pub new_balance: Decimal,
    pub entry: LedgerEntry,
    pub new_withdrawal_count: u32,
}

/// Add `amount` to `balance`.
///
/// Any positive amount is accepted as long as the sum still fits in a
/// `Decimal`; past that the deposit is rejected instead of overflowing.
pub fn deposit(balance: Decimal, amount: Decimal) -> Result<DepositOutcome> {
    if amount <= Decimal::ZERO {
        return Err(BankError::InvalidAmount(amount));
    }
    let new_balance = balance
        .checked_add(amount)
        .ok_or(BankError::BalanceOverflow { balance, amount })?;

    Ok(DepositOutcome {
        new_balance,
        entry: LedgerEntry {
            kind: EntryKind::Deposit,
            amount,
        },
    })
}

/// Take `amount` out of the balance.
///
/// Checks run in a fixed order and the first failure is reported:
/// amount, funds, per-transaction limit, then withdrawal count.
pub fn withdraw(request: &WithdrawRequest) -> Result<WithdrawOutcome> {
    let WithdrawRequest {
        balance,
        amount,
        per_transaction_limit,
        withdrawal_count,
        withdrawal_count_limit,
    } = *request;

    if amount <= Decimal::ZERO {
        return Err(BankError::InvalidAmount(amount));
    }
    if amount > balance {
        return Err(BankError::InsufficientFunds {
            requested: amount,
            available: balance,
        });
    }
    if amount > per_transaction_limit {
        return Err(BankError::LimitExceeded {
            requested: amount,
            limit: per_transaction_limit,
        });
    }
    if withdrawal_count >= withdrawal_count_limit {
        return Err(BankError::WithdrawalCountExceeded {
            limit: withdrawal_count_limit,
        });
    }

    Ok(WithdrawOutcome {
        new_balance: balance - amount,
        entry: LedgerEntry {
            kind: EntryKind::Withdrawal,
            amount,
        },
        new_withdrawal_count: withdrawal_count + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(balance: Decimal, amount: Decimal, count: u32) -> WithdrawRequest {
        WithdrawRequest {
            balance,
            amount,
            per_transaction_limit: dec!(500),
            withdrawal_count: count,
            withdrawal_count_limit: 3,
        }
    }

    #[test]
    fn test_deposit_adds_amount() {
        let outcome = deposit(dec!(100), dec!(50.25)).unwrap();
        assert_eq!(outcome.new_balance, dec!(150.25));
        assert_eq!(outcome.entry.kind, EntryKind::Deposit);
        assert_eq!(outcome.entry.amount, dec!(50.25));
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        assert_eq!(
            deposit(dec!(100), dec!(-5)),
            Err(BankError::InvalidAmount(dec!(-5)))
        );
        assert_eq!(
            deposit(dec!(100), Decimal::ZERO),
            Err(BankError::InvalidAmount(Decimal::ZERO))
        );
    }

    #[test]
    fn test_deposit_has_no_upper_bound() {
        let outcome = deposit(Decimal::ZERO, dec!(1000000000)).unwrap();
        assert_eq!(outcome.new_balance, dec!(1000000000));
    }

    #[test]
    fn test_deposit_overflow_is_rejected() {
        let result = deposit(Decimal::MAX, Decimal::ONE);
        assert_eq!(
            result,
            Err(BankError::BalanceOverflow {
                balance: Decimal::MAX,
                amount: Decimal::ONE,
            })
        );

        // Exactly reaching the maximum is still fine.
        let outcome = deposit(Decimal::MAX - Decimal::ONE, Decimal::ONE).unwrap();
        assert_eq!(outcome.new_balance, Decimal::MAX);
    }

    #[test]
    fn test_withdraw_success() {
        let outcome = withdraw(&request(dec!(1000), dec!(200), 0)).unwrap();
        assert_eq!(outcome.new_balance, dec!(800));
        assert_eq!(outcome.new_withdrawal_count, 1);
        assert_eq!(outcome.entry.kind, EntryKind::Withdrawal);
    }

    #[test]
    fn test_withdraw_invalid_amount_wins() {
        // Count is exhausted too, but the amount check runs first.
        let result = withdraw(&request(dec!(1000), dec!(0), 3));
        assert_eq!(result, Err(BankError::InvalidAmount(dec!(0))));
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let result = withdraw(&request(dec!(100), dec!(150), 0));
        assert!(matches!(result, Err(BankError::InsufficientFunds { .. })));

        // Still reported when the limit and count are also violated.
        let result = withdraw(&request(dec!(100), dec!(600), 3));
        assert!(matches!(result, Err(BankError::InsufficientFunds { .. })));
    }

    #[test]
    fn test_withdraw_limit_exceeded() {
        let result = withdraw(&request(dec!(1000), dec!(600), 0));
        assert_eq!(
            result,
            Err(BankError::LimitExceeded {
                requested: dec!(600),
                limit: dec!(500),
            })
        );
    }

    #[test]
    fn test_withdraw_limit_checked_before_count() {
        // Over the limit and out of withdrawals: the limit is reported.
        let result = withdraw(&request(dec!(1000), dec!(600), 3));
        assert_eq!(
            result,
            Err(BankError::LimitExceeded {
                requested: dec!(600),
                limit: dec!(500),
            })
        );
    }

    #[test]
    fn test_withdraw_count_exceeded() {
        let result = withdraw(&request(dec!(1000), dec!(200), 3));
        assert_eq!(result, Err(BankError::WithdrawalCountExceeded { limit: 3 }));
    }

    #[test]
    fn test_withdraw_exact_balance_and_limit() {
        let outcome = withdraw(&request(dec!(500), dec!(500), 2)).unwrap();
        assert_eq!(outcome.new_balance, Decimal::ZERO);
        assert_eq!(outcome.new_withdrawal_count, 3);
    }

    #[test]
    fn test_entry_display() {
        let entry = LedgerEntry {
            kind: EntryKind::Withdrawal,
            amount: dec!(42.5),
        };
        assert_eq!(entry.to_string(), "Withdrawal: R$ 42.50");
    }
}
