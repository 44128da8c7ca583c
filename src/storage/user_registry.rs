use crate::core::User;
use crate::error::{BankError, Result};
use crate::utils::{find_user, normalize_id};
use log::info;

/// Users in registration order, unique by normalized identifier
#[derive(Debug, Default)]
pub struct UserRegistry {
    inner: Vec<User>,
}

impl UserRegistry {
    pub fn new() -> UserRegistry {
        UserRegistry { inner: vec![] }
    }

    pub fn register_user(
        &mut self,
        full_name: &str,
        birth_date: &str,
        raw_id: &str,
        address: &str,
    ) -> Result<&User> {
        let personal_id = self.check_new_id(raw_id)?;
        self.inner
            .push(User::new(full_name, birth_date, personal_id, address));
        let user = &self.inner[self.inner.len() - 1];
        info!("Registered user {}", user.get_personal_id());
        Ok(user)
    }

    /// Normalize `raw_id` and make sure it could be registered.
    ///
    /// Lets the shell reject a bad identifier before asking for the rest of
    /// the user's details.
    pub fn check_new_id(&self, raw_id: &str) -> Result<String> {
        let personal_id = normalize_id(raw_id);
        if personal_id.is_empty() {
            return Err(BankError::InvalidIdentifier(raw_id.to_string()));
        }
        if self.find_user(&personal_id).is_some() {
            return Err(BankError::DuplicateUser(personal_id));
        }
        Ok(personal_id)
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        find_user(&self.inner, id)
    }

    pub fn list_users(&self) -> &[User] {
        self.inner.as_slice()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
