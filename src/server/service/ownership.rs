//! Authorization of booking mutations.
//!
//! A guest may only change bookings they own. The check sits behind `OwnershipCheck` so the
//! reservation service does not care how ownership is established.

use std::future::Future;

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{data::booking::BookingRepository, model::session::GuestSession};

pub trait OwnershipCheck {
    /// Whether the session's guest owns the booking with the given id.
    ///
    /// Returns `Ok(false)` both for bookings owned by someone else and for ids that do not
    /// exist, so callers cannot tell the two apart.
    fn owns(
        &self,
        session: &GuestSession,
        booking_id: i32,
    ) -> impl Future<Output = Result<bool, DbErr>> + Send;
}

/// Loads every booking of the session's guest and looks for the id among them.
///
/// Costs one query per check, linear in the guest's booking count.
pub struct BookingMembership<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingMembership<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl OwnershipCheck for BookingMembership<'_> {
    async fn owns(&self, session: &GuestSession, booking_id: i32) -> Result<bool, DbErr> {
        let repo = BookingRepository::new(self.db);

        let bookings = repo.get_by_guest(session.guest_id).await?;
        let owned = bookings.iter().any(|booking| booking.id == booking_id);

        if !owned {
            tracing::debug!(
                guest_id = session.guest_id,
                booking_id,
                "Booking is not among the guest's bookings"
            );
        }

        Ok(owned)
    }
}
