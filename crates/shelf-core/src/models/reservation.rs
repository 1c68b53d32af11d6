//! Reservation rows and the per-mode views returned by status lookups.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A row of the `Reservations` table.
///
/// Both references are nullable in the schema and are not enforced, so a
/// reservation may point at a book or patron that no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reservation {
    pub id: u64,
    pub book_id: Option<u64>,
    pub user_id: Option<u64>,
    pub reservation_date: Option<Date>,
}

/// Patron name and email joined onto a reservation lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Holder {
    pub name: String,
    pub email: String,
}

impl Holder {
    /// Returns a holder only when both joined columns carry a value.
    pub fn from_columns(name: Option<String>, email: Option<String>) -> Option<Self> {
        let name = name.filter(|name| !name.is_empty())?;
        let email = email.filter(|email| !email.is_empty())?;
        Some(Self { name, email })
    }
}

/// Result of a reservation status lookup.
///
/// Each lookup mode selects a different set of columns, so each gets its own
/// variant rather than a struct full of optional fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ReservationView {
    /// Looked up by book id: status, date, and holder.
    ///
    /// The holder is only set when the reservation is dated.
    Book {
        book_id: u64,
        status: String,
        reservation_date: Option<Date>,
        holder: Option<Holder>,
    },
    /// Looked up by patron id: one of the patron's reserved books.
    User {
        user_id: u64,
        title: String,
        status: String,
        reservation_date: Option<Date>,
    },
    /// Looked up by reservation id: the reserved book and its holder.
    Reservation {
        reservation_id: u64,
        title: String,
        status: String,
        holder: Option<Holder>,
    },
    /// Looked up by exact title: the first matching book.
    Title {
        title: String,
        book_id: u64,
        status: String,
        holder: Option<Holder>,
    },
}

impl ReservationView {
    /// Status column of the matched book.
    pub fn status(&self) -> &str {
        match self {
            Self::Book { status, .. }
            | Self::User { status, .. }
            | Self::Reservation { status, .. }
            | Self::Title { status, .. } => status,
        }
    }

    /// Whether the lookup found someone holding the book.
    ///
    /// Patron lookups carry no holder columns; a dated row counts as held.
    pub fn is_reserved(&self) -> bool {
        match self {
            Self::Book { holder, .. }
            | Self::Reservation { holder, .. }
            | Self::Title { holder, .. } => holder.is_some(),
            Self::User {
                reservation_date, ..
            } => reservation_date.is_some(),
        }
    }
}
