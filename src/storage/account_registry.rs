use crate::core::{Account, AccountLimits};
use crate::error::{BankError, Result};
use crate::storage::UserRegistry;
use log::info;

/// Name shown for an account whose holder can no longer be resolved
pub const UNKNOWN_OWNER: &str = "<unknown>";

/// Accounts in opening order. Numbers start at 1 and follow the order.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    inner: Vec<Account>,
}

impl AccountRegistry {
    pub fn new() -> AccountRegistry {
        AccountRegistry { inner: vec![] }
    }

    /// Open an account for the user matching `raw_id`.
    ///
    /// Fails with `UserNotFound` without consuming an account number.
    pub fn open_account(
        &mut self,
        users: &UserRegistry,
        raw_id: &str,
        branch_code: &str,
        limits: AccountLimits,
    ) -> Result<&Account> {
        let owner = users
            .find_user(raw_id)
            .ok_or_else(|| BankError::UserNotFound(raw_id.trim().to_string()))?;

        let account_number = self.next_account_number();
        self.inner.push(Account::new(
            branch_code,
            account_number,
            owner.get_personal_id(),
            limits,
        ));
        info!(
            "Opened account {branch_code}/{account_number} for {}",
            owner.get_personal_id()
        );
        Ok(&self.inner[self.inner.len() - 1])
    }

    fn next_account_number(&self) -> u32 {
        self.inner.len() as u32 + 1
    }

    pub fn find_account(&self, number: u32) -> Option<&Account> {
        self.inner
            .iter()
            .find(|account| account.get_account_number() == number)
    }

    pub fn find_account_mut(&mut self, number: u32) -> Option<&mut Account> {
        self.inner
            .iter_mut()
            .find(|account| account.get_account_number() == number)
    }

    /// Every account with its holder's name, `UNKNOWN_OWNER` when unresolved.
    pub fn list_accounts<'a>(&'a self, users: &'a UserRegistry) -> Vec<(&'a Account, &'a str)> {
        self.inner
            .iter()
            .map(|account| (account, owner_name(account, users)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Resolve an account holder's display name
pub fn owner_name<'a>(account: &Account, users: &'a UserRegistry) -> &'a str {
    users
        .find_user(account.get_owner_id())
        .map(|user| user.get_full_name())
        .unwrap_or(UNKNOWN_OWNER)
}
