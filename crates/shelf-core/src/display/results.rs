//! Result wrapper types for displaying operation outcomes.
//!
//! Update and delete confirmations are printed whether or not a row matched,
//! so they carry only the id and the requested change.

use std::fmt;

use crate::models::{Book, Reservation, User};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use shelf_core::{display::CreateResult, models::Book};
///
/// let book = Book {
///     id: 1,
///     title: "Emma".to_string(),
///     author: "Jane Austen".to_string(),
///     isbn: "978-0141439587".to_string(),
///     status: "available".to_string(),
/// };
///
/// let output = CreateResult::new(book).to_string();
/// assert!(output.starts_with("Book added successfully with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Book> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Book added successfully with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<User> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User added successfully with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Reservation> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reservation recorded with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying a book status update.
pub struct UpdateResult {
    pub id: u64,
    pub status: String,
}

impl UpdateResult {
    /// Create a new UpdateResult wrapper.
    pub fn new(id: u64, status: impl Into<String>) -> Self {
        Self {
            id,
            status: status.into(),
        }
    }
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Book details updated successfully!")?;
        writeln!(f)?;
        writeln!(f, "- Book ID: {}", self.id)?;
        writeln!(f, "- New status: {}", self.status)
    }
}

/// Wrapper type for displaying a book deletion.
pub struct DeleteResult {
    pub id: u64,
}

impl DeleteResult {
    /// Create a new DeleteResult wrapper.
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Book deleted successfully!")?;
        writeln!(f)?;
        writeln!(f, "- Book ID: {}", self.id)
    }
}
