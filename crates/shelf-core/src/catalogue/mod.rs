//! High-level catalogue API.
//!
//! [`Catalogue`] is the handle the CLI holds for the whole session. It owns
//! the single [`Database`] connection, takes the shared parameter structs from
//! [`crate::params`], and forwards to the store:
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   CLI / menu    │───▶│    Catalogue     │───▶│    Database     │
//! │                 │    │ (book_ops,       │    │   (via db/)     │
//! │                 │    │  reservation_ops)│    │                 │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! The connection is released when the catalogue is dropped, so every exit
//! path (including an error propagated out of the menu loop) closes it.
//! [`Catalogue::close`] closes explicitly and reports failures.
//!
//! # Example
//!
//! ```rust
//! use shelf_core::{CatalogueBuilder, params::{AddBook, Id}};
//!
//! # fn example() -> shelf_core::Result<()> {
//! let catalogue = CatalogueBuilder::new().in_memory().build()?;
//!
//! let book = catalogue.add_book(&AddBook {
//!     title: "Moby Dick".to_string(),
//!     author: "Herman Melville".to_string(),
//!     isbn: "978-0142437247".to_string(),
//!     status: "available".to_string(),
//! })?;
//!
//! let detail = catalogue.find_book(&Id { id: book.id })?.expect("just added");
//! assert!(!detail.is_reserved());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod book_ops;
pub mod builder;
pub mod reservation_ops;


pub use builder::CatalogueBuilder;

use crate::{db::Database, error::Result};

/// Main catalogue interface for books, patrons, and reservations.
pub struct Catalogue {
    pub(crate) db: Database,
}

impl Catalogue {
    /// Wraps an already opened database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Closes the underlying connection.
    pub fn close(self) -> Result<()> {
        self.db.close()
    }
}
