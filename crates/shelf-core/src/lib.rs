//! Core library for the Shelf library catalogue manager.
//!
//! This crate owns the SQLite store of books, patrons, and reservations and
//! the queries that join across them. Interfaces (the `shelf` CLI and its
//! interactive menu) only build parameter structs, call the [`Catalogue`],
//! and print the returned records.
//!
//! - [`db`]: the store, one connection, positional parameters only
//! - [`catalogue`]: the session handle and its operations
//! - [`models`]: records, lookup views, and key classification
//! - [`display`]: markdown formatting of records and outcomes
//! - [`params`]: interface-neutral parameter structs
//!
//! # Reservation lookups
//!
//! A single free-text key selects one of four query paths by prefix:
//! `LB<n>` (book id), `LU<n>` (patron id), `LR<n>` (reservation id), or an
//! exact title. See [`models::ReservationLookup::classify`]. Every lookup is
//! find-first: several matching rows still produce one result.
//!
//! # Quick Start
//!
//! ```rust
//! use shelf_core::{CatalogueBuilder, params::AddBook};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalogue = CatalogueBuilder::new().in_memory().build()?;
//!
//! catalogue.add_book(&AddBook {
//!     title: "Moby Dick".to_string(),
//!     author: "Herman Melville".to_string(),
//!     isbn: "978-0142437247".to_string(),
//!     status: "available".to_string(),
//! })?;
//!
//! let view = catalogue
//!     .find_reservation_status("Moby Dick")?
//!     .expect("title should match");
//! assert!(!view.is_reserved());
//!
//! for detail in catalogue.find_all_books()? {
//!     println!("{detail}");
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod catalogue;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use catalogue::{Catalogue, CatalogueBuilder};
pub use db::Database;
pub use display::{BookDetails, CreateResult, DeleteResult, OperationStatus, UpdateResult, Users};
pub use error::{CatalogueError, Result};
pub use models::{
    ActiveReservation, Book, BookDetail, Holder, Reservation, ReservationLookup, ReservationView,
    User,
};
pub use params::{AddBook, AddUser, Id, ReserveBook, UpdateBook};
