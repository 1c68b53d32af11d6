//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{BookDetail, User};

/// Newtype wrapper for displaying the full catalogue listing.
///
/// Prints "No books found in the database." for an empty catalogue, and
/// otherwise each book followed by a `---` separator.
pub struct BookDetails(pub Vec<BookDetail>);

impl BookDetails {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of books in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the book at the given index.
    pub fn get(&self, index: usize) -> Option<&BookDetail> {
        self.0.get(index)
    }

    /// Get an iterator over the books.
    pub fn iter(&self) -> std::slice::Iter<'_, BookDetail> {
        self.0.iter()
    }
}

impl Index<usize> for BookDetails {
    type Output = BookDetail;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for BookDetails {
    type Item = BookDetail;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<BookDetail>> for BookDetails {
    fn from(books: Vec<BookDetail>) -> Self {
        Self(books)
    }
}

impl fmt::Display for BookDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No books found in the database.");
        }

        for detail in &self.0 {
            write!(f, "{detail}")?;
            writeln!(f)?;
            writeln!(f, "---")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Newtype wrapper for displaying the patron list.
pub struct Users(pub Vec<User>);

impl Users {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of patrons in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<User>> for Users {
    fn from(users: Vec<User>) -> Self {
        Self(users)
    }
}

impl fmt::Display for Users {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No users found.");
        }

        for user in &self.0 {
            write!(f, "{user}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Book;

    fn detail(id: u64, title: &str) -> BookDetail {
        BookDetail {
            book: Book {
                id,
                title: title.to_string(),
                author: "Jane Austen".to_string(),
                isbn: "000".to_string(),
                status: "available".to_string(),
            },
            reservation: None,
        }
    }

    #[test]
    fn test_empty_book_list() {
        let books = BookDetails(Vec::new());
        assert!(books.is_empty());
        assert_eq!(books.to_string(), "No books found in the database.\n");
    }

    #[test]
    fn test_book_list_separates_entries() {
        let books = BookDetails::from(vec![detail(1, "Emma"), detail(2, "Persuasion")]);

        assert_eq!(books.len(), 2);
        assert_eq!(books[1].book.title, "Persuasion");
        assert_eq!(books.get(0).map(|d| d.book.id), Some(1));

        let output = books.to_string();
        assert_eq!(output.matches("---").count(), 2);
        assert!(output.find("# 1. Emma") < output.find("# 2. Persuasion"));
    }

    #[test]
    fn test_empty_user_list() {
        let users = Users(Vec::new());
        assert_eq!(users.to_string(), "No users found.\n");
    }

    #[test]
    fn test_user_list() {
        let users = Users::from(vec![User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }]);
        assert_eq!(users.len(), 1);
        assert!(users.to_string().contains("**Ada** (ID: 1)"));
    }
}
