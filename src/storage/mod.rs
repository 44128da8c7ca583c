//! In-memory registries
//!
//! Users and accounts live here for the duration of one run. Nothing is
//! written to disk.

pub mod account_registry;
pub mod user_registry;

pub use account_registry::{owner_name, AccountRegistry, UNKNOWN_OWNER};
pub use user_registry::UserRegistry;
