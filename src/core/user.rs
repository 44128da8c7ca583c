use serde::{Deserialize, Serialize};

/// A registered bank customer. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    full_name: String,
    birth_date: String,
    personal_id: String,
    address: String,
}

impl User {
    /// `personal_id` must already be normalized.
    pub(crate) fn new(
        full_name: &str,
        birth_date: &str,
        personal_id: String,
        address: &str,
    ) -> User {
        User {
            full_name: full_name.trim().to_string(),
            birth_date: birth_date.trim().to_string(),
            personal_id,
            address: address.trim().to_string(),
        }
    }

    pub fn get_full_name(&self) -> &str {
        self.full_name.as_str()
    }

    pub fn get_birth_date(&self) -> &str {
        self.birth_date.as_str()
    }

    pub fn get_personal_id(&self) -> &str {
        self.personal_id.as_str()
    }

    pub fn get_address(&self) -> &str {
        self.address.as_str()
    }
}
