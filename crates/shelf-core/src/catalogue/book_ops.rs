//! Single-book catalogue operations.

use log::info;

use super::Catalogue;
use crate::{
    error::Result,
    models::{Book, BookDetail},
    params::{AddBook, Id, UpdateBook},
};

impl Catalogue {
    /// Adds a book and returns it with its new id.
    pub fn add_book(&self, params: &AddBook) -> Result<Book> {
        let book = self.db.add_book(
            &params.title,
            &params.author,
            &params.isbn,
            &params.status,
        )?;
        info!("Added book {} \"{}\"", book.id, book.title);
        Ok(book)
    }

    /// Retrieves a book and its current reservation.
    ///
    /// `None` means no book has this id.
    pub fn find_book(&self, params: &Id) -> Result<Option<BookDetail>> {
        self.db.find_book(params.id)
    }

    /// Changes a book's status.
    ///
    /// Returns the number of rows changed. An unknown id yields `0` rather
    /// than an error, and callers report success either way.
    pub fn update_book(&self, params: &UpdateBook) -> Result<usize> {
        self.db.update_book_status(params.id, &params.status)
    }

    /// Deletes a book together with its reservations.
    ///
    /// Returns the number of book rows removed; `0` for an unknown id.
    pub fn delete_book(&mut self, params: &Id) -> Result<usize> {
        let removed = self.db.delete_book(params.id)?;
        if removed > 0 {
            info!("Deleted book {}", params.id);
        }
        Ok(removed)
    }

    /// Lists every book once with its first reservation, in id order.
    pub fn find_all_books(&self) -> Result<Vec<BookDetail>> {
        self.db.list_books()
    }
}
