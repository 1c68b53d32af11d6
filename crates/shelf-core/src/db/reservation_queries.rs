//! Reservation status lookups and reservation rows.
//!
//! Each [`ReservationLookup`] variant maps to one query with its own join
//! path and column set. All four return at most one row: when several rows
//! match, the first in the stated order wins.

use jiff::civil::Date;
use log::debug;
use rusqlite::{OptionalExtension, params};

use super::utils::{get_date, get_id, get_optional_id};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Holder, Reservation, ReservationLookup, ReservationView},
};

const STATUS_BY_BOOK_SQL: &str = "SELECT Books.BookID, Books.Status, Reservations.ReservationDate, Users.Name, Users.Email \
     FROM Books \
     LEFT JOIN Reservations ON Books.BookID = Reservations.BookID \
     LEFT JOIN Users ON Reservations.UserID = Users.UserID \
     WHERE Books.BookID = ?1 \
     ORDER BY Reservations.ReservationID LIMIT 1";
const STATUS_BY_USER_SQL: &str = "SELECT Books.Title, Books.Status, Reservations.ReservationDate \
     FROM Books \
     LEFT JOIN Reservations ON Books.BookID = Reservations.BookID \
     WHERE Reservations.UserID = ?1 \
     ORDER BY Reservations.ReservationID LIMIT 1";
const STATUS_BY_RESERVATION_SQL: &str = "SELECT Books.Title, Books.Status, Users.Name, Users.Email \
     FROM Books \
     LEFT JOIN Reservations ON Books.BookID = Reservations.BookID \
     LEFT JOIN Users ON Reservations.UserID = Users.UserID \
     WHERE Reservations.ReservationID = ?1 \
     LIMIT 1";
const STATUS_BY_TITLE_SQL: &str = "SELECT Books.BookID, Books.Status, Users.Name, Users.Email \
     FROM Books \
     LEFT JOIN Reservations ON Books.BookID = Reservations.BookID \
     LEFT JOIN Users ON Reservations.UserID = Users.UserID \
     WHERE Books.Title = ?1 \
     ORDER BY Books.BookID, Reservations.ReservationID LIMIT 1";

const INSERT_RESERVATION_SQL: &str =
    "INSERT INTO Reservations (BookID, UserID, ReservationDate) VALUES (?1, ?2, ?3)";
const SELECT_RESERVATIONS_SQL: &str = "SELECT ReservationID, BookID, UserID, ReservationDate \
     FROM Reservations ORDER BY ReservationID";

impl super::Database {
    /// Looks up the reservation status along the path chosen by `lookup`.
    ///
    /// Returns `None` when nothing matches.
    pub fn find_reservation_status(
        &self,
        lookup: &ReservationLookup,
    ) -> Result<Option<ReservationView>> {
        debug!("Reservation status lookup by {lookup}");

        let view = match lookup {
            ReservationLookup::ByBookId(id) => self
                .connection
                .query_row(STATUS_BY_BOOK_SQL, params![*id as i64], |row| {
                    // Same rule as a book detail: no date, no holder.
                    let reservation_date = get_date(row, 2)?;
                    let holder = Holder::from_columns(row.get(3)?, row.get(4)?)
                        .filter(|_| reservation_date.is_some());
                    Ok(ReservationView::Book {
                        book_id: get_id(row, 0)?,
                        status: row.get(1)?,
                        reservation_date,
                        holder,
                    })
                })
                .optional(),
            ReservationLookup::ByUserId(id) => self
                .connection
                .query_row(STATUS_BY_USER_SQL, params![*id as i64], |row| {
                    Ok(ReservationView::User {
                        user_id: *id,
                        title: row.get(0)?,
                        status: row.get(1)?,
                        reservation_date: get_date(row, 2)?,
                    })
                })
                .optional(),
            ReservationLookup::ByReservationId(id) => self
                .connection
                .query_row(STATUS_BY_RESERVATION_SQL, params![*id as i64], |row| {
                    Ok(ReservationView::Reservation {
                        reservation_id: *id,
                        title: row.get(0)?,
                        status: row.get(1)?,
                        holder: Holder::from_columns(row.get(2)?, row.get(3)?),
                    })
                })
                .optional(),
            ReservationLookup::ByTitle(title) => self
                .connection
                .query_row(STATUS_BY_TITLE_SQL, params![title], |row| {
                    Ok(ReservationView::Title {
                        title: title.clone(),
                        book_id: get_id(row, 0)?,
                        status: row.get(1)?,
                        holder: Holder::from_columns(row.get(2)?, row.get(3)?),
                    })
                })
                .optional(),
        };

        view.db_context("Failed to query reservation status")
    }

    /// Records a reservation of a book by a patron on the given date.
    ///
    /// Neither id is checked against its table, and the book's status is
    /// left unchanged.
    pub fn add_reservation(&self, book_id: u64, user_id: u64, date: Date) -> Result<Reservation> {
        self.connection
            .execute(
                INSERT_RESERVATION_SQL,
                params![book_id as i64, user_id as i64, date.to_string()],
            )
            .db_context("Failed to insert reservation")?;

        let id = self.connection.last_insert_rowid() as u64;
        debug!("Inserted reservation {id} for book {book_id} by user {user_id}");

        Ok(Reservation {
            id,
            book_id: Some(book_id),
            user_id: Some(user_id),
            reservation_date: Some(date),
        })
    }

    /// Lists every reservation row in id order.
    pub fn list_reservations(&self) -> Result<Vec<Reservation>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_RESERVATIONS_SQL)
            .db_context("Failed to prepare query")?;

        let reservations = stmt
            .query_map([], |row| {
                Ok(Reservation {
                    id: get_id(row, 0)?,
                    book_id: get_optional_id(row, 1)?,
                    user_id: get_optional_id(row, 2)?,
                    reservation_date: get_date(row, 3)?,
                })
            })
            .db_context("Failed to query reservations")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch reservations")?;

        Ok(reservations)
    }
}
