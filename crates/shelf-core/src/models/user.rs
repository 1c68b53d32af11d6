//! Patron model.

use serde::{Deserialize, Serialize};

/// A library patron as stored in the `Users` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Patron name
    pub name: String,

    /// Patron email address
    pub email: String,
}
