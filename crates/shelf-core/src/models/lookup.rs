//! Classification of free-text reservation lookup keys.

use std::fmt;

/// Prefix marking a book id lookup, e.g. `LB7`.
pub const BOOK_PREFIX: &str = "LB";
/// Prefix marking a patron id lookup, e.g. `LU3`.
pub const USER_PREFIX: &str = "LU";
/// Prefix marking a reservation id lookup, e.g. `LR5`.
pub const RESERVATION_PREFIX: &str = "LR";

/// The query path selected for a reservation status lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationLookup {
    ByBookId(u64),
    ByUserId(u64),
    ByReservationId(u64),
    ByTitle(String),
}

impl ReservationLookup {
    /// Classifies a raw key by its two-letter prefix.
    ///
    /// Prefixes are checked in the order `LB`, `LU`, `LR`. The text after a
    /// prefix must be plain ASCII digits (no sign); otherwise the whole key is treated
    /// as a title so that titles such as "LBJ: A Life" stay searchable.
    ///
    /// ```rust
    /// use shelf_core::models::ReservationLookup;
    ///
    /// assert_eq!(ReservationLookup::classify("LB7"), ReservationLookup::ByBookId(7));
    /// assert_eq!(ReservationLookup::classify("LU3"), ReservationLookup::ByUserId(3));
    /// assert_eq!(
    ///     ReservationLookup::classify("Moby Dick"),
    ///     ReservationLookup::ByTitle("Moby Dick".to_string())
    /// );
    /// ```
    pub fn classify(key: &str) -> Self {
        let prefixed: [(&str, fn(u64) -> Self); 3] = [
            (BOOK_PREFIX, Self::ByBookId),
            (USER_PREFIX, Self::ByUserId),
            (RESERVATION_PREFIX, Self::ByReservationId),
        ];

        for (prefix, variant) in prefixed {
            if let Some(rest) = key.strip_prefix(prefix) {
                return match rest.parse::<u64>() {
                    Ok(id) if rest.bytes().all(|b| b.is_ascii_digit()) => variant(id),
                    _ => Self::ByTitle(key.to_string()),
                };
            }
        }

        Self::ByTitle(key.to_string())
    }
}

impl From<&str> for ReservationLookup {
    fn from(key: &str) -> Self {
        Self::classify(key)
    }
}

impl fmt::Display for ReservationLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByBookId(id) => write!(f, "book {id}"),
            Self::ByUserId(id) => write!(f, "user {id}"),
            Self::ByReservationId(id) => write!(f, "reservation {id}"),
            Self::ByTitle(title) => write!(f, "title \"{title}\""),
        }
    }
}
