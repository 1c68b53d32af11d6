//! Parameter structures for catalogue operations.
//!
//! These are plain structs shared by every interface that drives the
//! catalogue. The CLI defines its own clap argument types and converts them
//! into these with `From`, keeping clap out of the core crate:
//!
//! ```text
//! CLI args (clap) ──From──▶ core params ──▶ Catalogue
//! menu prompts    ────────▶ core params ──▶ Catalogue
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogueError, Result};

/// Parameters for operations requiring just an id.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Id {
    /// The id of the record to operate on
    pub id: u64,
}

/// Parameters for adding a book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub status: String,
}

/// Parameters for changing a book's status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBook {
    /// Book to update
    pub id: u64,
    /// Replacement status text
    pub status: String,
}

/// Parameters for registering a patron.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddUser {
    pub name: String,
    pub email: String,
}

/// Parameters for recording a reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveBook {
    pub book_id: u64,
    pub user_id: u64,
    /// Date of the reservation
    pub date: Date,
}

/// Parses a typed-in record id.
///
/// Surrounding whitespace is ignored. Anything other than plain ASCII digits
/// (including a leading `+`) is rejected with [`CatalogueError::InvalidInput`] naming `field`.
///
/// ```rust
/// use shelf_core::params::parse_id;
///
/// assert_eq!(parse_id("BookID", " 42 ").unwrap(), 42);
/// assert!(parse_id("BookID", "forty-two").is_err());
/// ```
pub fn parse_id(field: &str, text: &str) -> Result<u64> {
    let text = text.trim();
    let invalid =
        || CatalogueError::invalid_input(field).with_reason(format!("'{text}' is not a valid id"));

    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    text.parse::<u64>().map_err(|_| invalid())
}
