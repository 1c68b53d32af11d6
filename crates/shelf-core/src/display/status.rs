//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Shown when a book id lookup matches nothing.
pub const BOOK_NOT_FOUND: &str = "Book not found.";
/// Shown when a reservation status lookup matches nothing.
pub const RESERVATION_NOT_FOUND: &str = "No matching reservation found.";
/// Shown in place of holder details for an unreserved book.
pub const NOT_RESERVED: &str = "Not reserved by anyone.";

/// Wrapper type for displaying a one-line operation outcome.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            writeln!(f, "{}", self.message)
        } else {
            writeln!(f, "Error: {}", self.message)
        }
    }
}
