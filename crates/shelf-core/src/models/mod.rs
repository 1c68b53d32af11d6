//! Data models for books, patrons, and reservations.
//!
//! These types mirror the three tables of the catalogue store plus the joined
//! shapes produced by lookups. Display implementations live in
//! [`crate::display::models`] so that formatting stays separate from the data.
//!
//! Joined columns coming out of a left join are optional. The constructors
//! [`ActiveReservation::from_columns`] and [`Holder::from_columns`] normalize
//! them: a reservation only counts when every joined field is present, and
//! anything less is reported as "not reserved".

pub mod book;
pub mod lookup;
pub mod reservation;
pub mod user;


pub use book::{ActiveReservation, Book, BookDetail};
pub use lookup::ReservationLookup;
pub use reservation::{Holder, Reservation, ReservationView};
pub use user::User;
