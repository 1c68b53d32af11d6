//! Display formatting for catalogue records and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes get newtype wrappers so the same data
//! can be shown differently in lists and confirmations. Everything renders as
//! markdown, which the CLI either prints through its terminal skin or as
//! plain text.
//!
//! - [`collections`]: list wrappers ([`BookDetails`], [`Users`])
//! - [`results`]: create/update/delete confirmations
//! - [`status`]: one-line success/failure messages and not-found texts
//! - [`models`]: `Display` for books, patrons, reservations, lookup views
//!
//! # Example
//!
//! ```rust
//! use shelf_core::{display::BookDetails, models::{Book, BookDetail}};
//!
//! let books = BookDetails(vec![BookDetail {
//!     book: Book {
//!         id: 1,
//!         title: "Emma".to_string(),
//!         author: "Jane Austen".to_string(),
//!         isbn: "978-0141439587".to_string(),
//!         status: "available".to_string(),
//!     },
//!     reservation: None,
//! }]);
//!
//! let output = books.to_string();
//! assert!(output.contains("# 1. Emma"));
//! assert!(output.contains("Not reserved by anyone."));
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{BookDetails, Users};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::{BOOK_NOT_FOUND, NOT_RESERVED, OperationStatus, RESERVATION_NOT_FOUND};
