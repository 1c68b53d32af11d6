//! Book model and its joined reservation detail.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A catalogue entry as stored in the `Books` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Unique identifier, assigned by the store and never changed
    pub id: u64,

    /// Title of the book
    pub title: String,

    /// Author of the book
    pub author: String,

    /// ISBN as entered; not validated
    pub isbn: String,

    /// Free-text status such as "available" or "reserved"
    pub status: String,
}

/// The reservation currently attached to a book.
///
/// Only built when the joined reservation date, patron name, and patron
/// email are all present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActiveReservation {
    /// Name of the reserving patron
    pub user_name: String,

    /// Email of the reserving patron
    pub user_email: String,

    /// Date the reservation was made
    pub reserved_on: Date,
}

impl ActiveReservation {
    /// Builds a reservation from optional joined columns, returning `None`
    /// when any of them is missing or blank.
    pub fn from_columns(
        reserved_on: Option<Date>,
        user_name: Option<String>,
        user_email: Option<String>,
    ) -> Option<Self> {
        let reserved_on = reserved_on?;
        let user_name = user_name.filter(|name| !name.is_empty())?;
        let user_email = user_email.filter(|email| !email.is_empty())?;

        Some(Self {
            user_name,
            user_email,
            reserved_on,
        })
    }
}

/// A book together with its current reservation, if any.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookDetail {
    #[serde(flatten)]
    pub book: Book,

    /// Current reservation; `None` means "not reserved"
    pub reservation: Option<ActiveReservation>,
}

impl BookDetail {
    /// Whether the book has a complete reservation attached.
    pub fn is_reserved(&self) -> bool {
        self.reservation.is_some()
    }
}
