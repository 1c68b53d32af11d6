//! Reservation status lookups, patrons, and reservation recording.

use log::info;

use super::Catalogue;
use crate::{
    error::Result,
    models::{Reservation, ReservationLookup, ReservationView, User},
    params::{AddUser, ReserveBook},
};

impl Catalogue {
    /// Looks up reservation status from a free-text key.
    ///
    /// The key is routed by prefix: `LB<n>` book id, `LU<n>` patron id,
    /// `LR<n>` reservation id, anything else an exact title. Only the first
    /// matching row is returned, even when several would match.
    pub fn find_reservation_status(&self, key: &str) -> Result<Option<ReservationView>> {
        self.find_reservation(&ReservationLookup::classify(key))
    }

    /// Looks up reservation status for an already classified key.
    pub fn find_reservation(&self, lookup: &ReservationLookup) -> Result<Option<ReservationView>> {
        self.db.find_reservation_status(lookup)
    }

    /// Registers a patron.
    pub fn add_user(&self, params: &AddUser) -> Result<User> {
        let user = self.db.add_user(&params.name, &params.email)?;
        info!("Added user {} \"{}\"", user.id, user.name);
        Ok(user)
    }

    /// Lists every patron in id order.
    pub fn list_users(&self) -> Result<Vec<User>> {
        self.db.list_users()
    }

    /// Records a reservation. The book's status is not changed.
    pub fn reserve_book(&self, params: &ReserveBook) -> Result<Reservation> {
        let reservation = self
            .db
            .add_reservation(params.book_id, params.user_id, params.date)?;
        info!(
            "Recorded reservation {} of book {} by user {}",
            reservation.id, params.book_id, params.user_id
        );
        Ok(reservation)
    }

    /// Lists every reservation row in id order.
    pub fn list_reservations(&self) -> Result<Vec<Reservation>> {
        self.db.list_reservations()
    }
}
