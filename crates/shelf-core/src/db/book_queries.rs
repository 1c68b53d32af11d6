//! Single-book CRUD and the unfiltered catalogue listing.

use log::{debug, warn};
use rusqlite::{OptionalExtension, Row, params};

use super::utils::{get_date, get_id};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{ActiveReservation, Book, BookDetail},
};

const INSERT_BOOK_SQL: &str =
    "INSERT INTO Books (Title, Author, ISBN, Status) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_BOOK_STATUS_SQL: &str = "UPDATE Books SET Status = ?1 WHERE BookID = ?2";
const DELETE_BOOK_SQL: &str = "DELETE FROM Books WHERE BookID = ?1";
const DELETE_BOOK_RESERVATIONS_SQL: &str = "DELETE FROM Reservations WHERE BookID = ?1";

// Book columns followed by the first reservation's date and patron.
const BOOK_DETAIL_SQL: &str = "SELECT Books.BookID, Books.Title, Books.Author, Books.ISBN, Books.Status, \
     Reservations.ReservationDate, Users.Name, Users.Email \
     FROM Books \
     LEFT JOIN Reservations ON Books.BookID = Reservations.BookID \
     LEFT JOIN Users ON Reservations.UserID = Users.UserID";
const FIND_BOOK_FILTER: &str = " WHERE Books.BookID = ?1 ORDER BY Reservations.ReservationID LIMIT 1";
const LIST_BOOKS_ORDER: &str = " ORDER BY Books.BookID, Reservations.ReservationID";

fn book_detail_from_row(row: &Row<'_>) -> rusqlite::Result<BookDetail> {
    let book = Book {
        id: get_id(row, 0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        isbn: row.get(3)?,
        status: row.get(4)?,
    };
    let reservation = ActiveReservation::from_columns(get_date(row, 5)?, row.get(6)?, row.get(7)?);

    Ok(BookDetail { book, reservation })
}

impl super::Database {
    /// Inserts a new book and returns it with its generated id.
    ///
    /// No format or duplicate checks are made; the same ISBN may be added
    /// any number of times.
    pub fn add_book(&self, title: &str, author: &str, isbn: &str, status: &str) -> Result<Book> {
        self.connection
            .execute(INSERT_BOOK_SQL, params![title, author, isbn, status])
            .db_context("Failed to insert book")?;

        let id = self.connection.last_insert_rowid() as u64;
        debug!("Inserted book {id}");

        Ok(Book {
            id,
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            status: status.into(),
        })
    }

    /// Retrieves a book with its current reservation.
    ///
    /// When several reservations reference the book, the one with the lowest
    /// reservation id is used.
    pub fn find_book(&self, id: u64) -> Result<Option<BookDetail>> {
        let sql = format!("{BOOK_DETAIL_SQL}{FIND_BOOK_FILTER}");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], book_detail_from_row)
            .optional()
            .db_context("Failed to query book")
    }

    /// Lists every book once, in id order, each with its first reservation.
    pub fn list_books(&self) -> Result<Vec<BookDetail>> {
        let sql = format!("{BOOK_DETAIL_SQL}{LIST_BOOKS_ORDER}");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], book_detail_from_row)
            .db_context("Failed to query books")?;

        // Rows arrive grouped by book; keep the first row of each group.
        let mut books: Vec<BookDetail> = Vec::new();
        for row in rows {
            let detail = row.db_context("Failed to fetch books")?;
            if books.last().is_some_and(|last| last.book.id == detail.book.id) {
                continue;
            }
            books.push(detail);
        }

        Ok(books)
    }

    /// Sets the status of a book, returning the number of rows changed.
    ///
    /// An unknown id changes nothing and is not an error.
    pub fn update_book_status(&self, id: u64, status: &str) -> Result<usize> {
        let changed = self
            .connection
            .execute(UPDATE_BOOK_STATUS_SQL, params![status, id as i64])
            .db_context("Failed to update book status")?;

        if changed == 0 {
            warn!("Status update matched no book with id {id}");
        }
        Ok(changed)
    }

    /// Deletes a book and every reservation that references it.
    ///
    /// Both deletes commit together. Returns the number of book rows removed;
    /// an unknown id removes nothing and is not an error.
    pub fn delete_book(&mut self, id: u64) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let books = tx
            .execute(DELETE_BOOK_SQL, params![id as i64])
            .db_context("Failed to delete book")?;
        let reservations = tx
            .execute(DELETE_BOOK_RESERVATIONS_SQL, params![id as i64])
            .db_context("Failed to delete book reservations")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Deleted book {id} ({books} book rows, {reservations} reservation rows)");
        if books == 0 {
            warn!("Delete matched no book with id {id}");
        }
        Ok(books)
    }
}
