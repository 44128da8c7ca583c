//! Session state
//!
//! A `Session` owns everything one run of the bank knows about: the user and
//! account registries, the configured defaults for new accounts, and the
//! single active account. It is passed explicitly to the shell, so tests can
//! build as many independent sessions as they like.

use crate::config::Config;
use crate::core::{render_statement, Account, AccountLimits, LedgerEntry, User};
use crate::error::{BankError, Result};
use crate::storage::{owner_name, AccountRegistry, UserRegistry};
use log::{debug, info, warn};
use rust_decimal::Decimal;

pub struct Session {
    users: UserRegistry,
    accounts: AccountRegistry,
    branch_code: String,
    limits: AccountLimits,
    active_account: Option<u32>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(&Config::default())
    }
}

impl Session {
    pub fn new(config: &Config) -> Session {
        Session {
            users: UserRegistry::new(),
            accounts: AccountRegistry::new(),
            branch_code: config.branch_code.clone(),
            limits: config.account_limits(),
            active_account: None,
        }
    }

    pub fn register_user(
        &mut self,
        full_name: &str,
        birth_date: &str,
        raw_id: &str,
        address: &str,
    ) -> Result<&User> {
        self.users
            .register_user(full_name, birth_date, raw_id, address)
    }

    /// Open an account with the session's branch code and default limits
    pub fn open_account(&mut self, raw_id: &str) -> Result<&Account> {
        self.accounts
            .open_account(&self.users, raw_id, &self.branch_code, self.limits)
    }

    /// Make account `number` the target of deposits, withdrawals and
    /// statements. An unknown number clears the selection.
    pub fn select_account(&mut self, number: u32) -> Result<&Account> {
        match self.accounts.find_account(number) {
            Some(account) => {
                self.active_account = Some(number);
                info!("Selected account {number}");
                Ok(account)
            }
            None => {
                self.active_account = None;
                Err(BankError::AccountNotFound(number))
            }
        }
    }

    pub fn clear_active_account(&mut self) {
        self.active_account = None;
    }

    pub fn active_account(&self) -> Option<&Account> {
        self.active_account
            .and_then(|number| self.accounts.find_account(number))
    }

    fn active_account_mut(&mut self) -> Result<&mut Account> {
        let number = self.active_account.ok_or(BankError::NoActiveAccount)?;
        self.accounts
            .find_account_mut(number)
            .ok_or(BankError::AccountNotFound(number))
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<LedgerEntry> {
        let account = self.active_account_mut()?;
        let number = account.get_account_number();
        match account.deposit(amount) {
            Ok(entry) => {
                debug!("Account {number}: {entry}");
                Ok(entry)
            }
            Err(e) => {
                warn!("Account {number}: deposit rejected: {e}");
                Err(e)
            }
        }
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<LedgerEntry> {
        let account = self.active_account_mut()?;
        let number = account.get_account_number();
        match account.withdraw(amount) {
            Ok(entry) => {
                debug!("Account {number}: {entry}");
                Ok(entry)
            }
            Err(e) => {
                warn!("Account {number}: withdrawal rejected: {e}");
                Err(e)
            }
        }
    }

    /// Statement of the active account
    pub fn statement(&self) -> Result<String> {
        let account = self.active_account().ok_or(BankError::NoActiveAccount)?;
        Ok(render_statement(
            account.get_balance(),
            account.get_transaction_log(),
        ))
    }

    /// Holder name of `account`, or the unknown-owner placeholder
    pub fn owner_name(&self, account: &Account) -> &str {
        owner_name(account, &self.users)
    }

    pub fn users(&self) -> &UserRegistry {
        &self.users
    }

    pub fn accounts(&self) -> &AccountRegistry {
        &self.accounts
    }

    pub fn list_accounts(&self) -> Vec<(&Account, &str)> {
        self.accounts.list_accounts(&self.users)
    }
}
