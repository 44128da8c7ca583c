//! Utility functions and helpers
//!
//! Identifier normalization and lookup shared by the registries.

pub mod identifier;

pub use identifier::{find_user, normalize_id};
