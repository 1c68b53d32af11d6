//! SQLite store for the catalogue.
//!
//! [`Database`] owns the single connection used for the life of the process.
//! Query groups are split across submodules that each add methods to it:
//!
//! - [`schema`]: table creation
//! - [`book_queries`]: single-book CRUD and the list-all view
//! - [`reservation_queries`]: prefix-routed status lookups and reservation rows
//! - [`user_queries`]: patron rows
//!
//! Every statement binds its values positionally. Single statements run in
//! autocommit mode; the book delete groups its two statements in one
//! transaction.

use std::path::Path;

use log::info;
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod book_queries;
pub mod reservation_queries;
pub mod schema;
pub mod user_queries;
pub(crate) mod utils;

/// Database connection and operations handler.
///
/// Dropping the handle closes the connection; [`Database::close`] does the
/// same but reports close failures.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        info!("Opened catalogue database at {}", path.display());

        let db = Self { connection };
        db.initialize()?;
        Ok(db)
    }

    /// Opens a private in-memory database with the schema applied.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize()?;
        Ok(db)
    }

    /// Closes the connection, surfacing any error SQLite reports.
    pub fn close(self) -> Result<()> {
        self.connection
            .close()
            .map_err(|(_, e)| e)
            .db_context("Failed to close database connection")?;
        info!("Closed catalogue database");
        Ok(())
    }
}
