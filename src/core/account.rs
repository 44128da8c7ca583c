use crate::core::ledger::{self, LedgerEntry, WithdrawRequest};
use crate::core::monetary::{DEFAULT_WITHDRAWAL_COUNT_LIMIT, DEFAULT_WITHDRAWAL_VALUE_LIMIT};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Withdrawal limits applied to an account when it is opened
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccountLimits {
    pub withdrawal_value_limit: Decimal,
    pub withdrawal_count_limit: u32,
}

impl Default for AccountLimits {
    fn default() -> Self {
        AccountLimits {
            withdrawal_value_limit: DEFAULT_WITHDRAWAL_VALUE_LIMIT,
            withdrawal_count_limit: DEFAULT_WITHDRAWAL_COUNT_LIMIT,
        }
    }
}

/// A checking account.
///
/// `owner_id` is a back-reference into the user registry, not ownership.
/// Balance, log and withdrawal count only change through `deposit` and
/// `withdraw`, which apply a ledger outcome all at once or not at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    branch_code: String,
    account_number: u32,
    owner_id: String,
    balance: Decimal,
    transaction_log: Vec<LedgerEntry>,
    withdrawal_count: u32,
    limits: AccountLimits,
}

impl Account {
    pub(crate) fn new(
        branch_code: &str,
        account_number: u32,
        owner_id: &str,
        limits: AccountLimits,
    ) -> Account {
        Account {
            branch_code: branch_code.to_string(),
            account_number,
            owner_id: owner_id.to_string(),
            balance: Decimal::ZERO,
            transaction_log: vec![],
            withdrawal_count: 0,
            limits,
        }
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<LedgerEntry> {
        let outcome = ledger::deposit(self.balance, amount)?;
        self.balance = outcome.new_balance;
        self.transaction_log.push(outcome.entry.clone());
        Ok(outcome.entry)
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<LedgerEntry> {
        let outcome = ledger::withdraw(&WithdrawRequest {
            balance: self.balance,
            amount,
            per_transaction_limit: self.limits.withdrawal_value_limit,
            withdrawal_count: self.withdrawal_count,
            withdrawal_count_limit: self.limits.withdrawal_count_limit,
        })?;
        self.balance = outcome.new_balance;
        self.withdrawal_count = outcome.new_withdrawal_count;
        self.transaction_log.push(outcome.entry.clone());
        Ok(outcome.entry)
    }

    pub fn get_branch_code(&self) -> &str {
        self.branch_code.as_str()
    }

    pub fn get_account_number(&self) -> u32 {
        self.account_number
    }

    pub fn get_owner_id(&self) -> &str {
        self.owner_id.as_str()
    }

    pub fn get_balance(&self) -> Decimal {
        self.balance
    }

    pub fn get_transaction_log(&self) -> &[LedgerEntry] {
        self.transaction_log.as_slice()
    }

    pub fn get_withdrawal_count(&self) -> u32 {
        self.withdrawal_count
    }

    pub fn get_limits(&self) -> AccountLimits {
        self.limits
    }
}
