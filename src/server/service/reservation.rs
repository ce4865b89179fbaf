//! Guest-facing management of existing bookings.
//!
//! Every mutation runs authenticate, authorize, validate, persist and invalidate in that
//! order. Authorization goes through `OwnershipCheck`; a booking the guest does not own is
//! reported as not found whether or not it exists.

use sea_orm::DatabaseConnection;

use crate::{
    model::booking::{DeleteReservationForm, UpdateReservationForm},
    server::{
        data::{booking::BookingRepository, cabin::CabinRepository},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            booking::{EditableReservation, Reservation, UpdateBookingParams},
            session::GuestSession,
        },
        navigation::{Mutation, RESERVATIONS_PATH},
        service::{
            ownership::{BookingMembership, OwnershipCheck},
            view_cache::ViewCache,
        },
        util::{
            parse::{parse_id, parse_positive},
            validate::truncate_observations,
        },
    },
};

/// Path of the edit page for one reservation.
///
/// The page is rendered fresh on every request; the path is still invalidated so any
/// cached copy cannot outlive an update.
pub fn edit_path(booking_id: i32) -> String {
    format!("{}/edit/{}", RESERVATIONS_PATH, booking_id)
}

pub struct ReservationService<'a, O = BookingMembership<'a>> {
    db: &'a DatabaseConnection,
    view_cache: &'a ViewCache,
    ownership: O,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection, view_cache: &'a ViewCache) -> Self {
        Self {
            db,
            view_cache,
            ownership: BookingMembership::new(db),
        }
    }
}

impl<'a, O: OwnershipCheck> ReservationService<'a, O> {
    /// Creates the service with a different ownership check, e.g. an indexed lookup.
    pub fn with_ownership(
        db: &'a DatabaseConnection,
        view_cache: &'a ViewCache,
        ownership: O,
    ) -> Self {
        Self {
            db,
            view_cache,
            ownership,
        }
    }

    /// Lists the signed-in guest's bookings with their cabin names.
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)` - Bookings by start date, possibly empty
    /// - `Err(AppError::AuthErr(Unauthenticated))` - No session
    pub async fn list(&self, session: Option<&GuestSession>) -> Result<Vec<Reservation>, AppError> {
        let session = AuthGuard::require(session)?;
        let repo = BookingRepository::new(self.db);

        Ok(repo.get_reservations_by_guest(session.guest_id).await?)
    }

    /// Loads an owned booking with its cabin's capacity for the edit form.
    ///
    /// # Returns
    /// - `Ok(EditableReservation)` - The booking and its cabin's `max_capacity`
    /// - `Err(AppError::AuthErr(Unauthenticated))` - No session
    /// - `Err(AppError::NotFound)` - Booking missing or owned by another guest
    pub async fn get_for_edit(
        &self,
        session: Option<&GuestSession>,
        booking_id: i32,
    ) -> Result<EditableReservation, AppError> {
        let session = AuthGuard::require(session)?;

        self.authorize(session, booking_id).await?;

        let booking = BookingRepository::new(self.db)
            .get_by_id(booking_id)
            .await?
            .ok_or_else(not_found)?;
        let cabin = CabinRepository::new(self.db)
            .get_by_id(booking.cabin_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cabin not found".to_string()))?;

        Ok(EditableReservation {
            booking,
            max_capacity: cabin.max_capacity,
        })
    }

    /// Deletes one of the signed-in guest's bookings.
    ///
    /// # Returns
    /// - `Ok(Mutation::DeleteReservation)` - Booking deleted, reservation list invalidated
    /// - `Err(AppError::AuthErr(Unauthenticated))` - No session
    /// - `Err(AppError::InvalidInput)` - `bookingId` is not an id
    /// - `Err(AppError::NotFound)` - Booking is not owned by the guest; nothing was written
    /// - `Err(AppError::Persistence)` - The delete failed
    pub async fn delete_reservation(
        &self,
        session: Option<&GuestSession>,
        form: &DeleteReservationForm,
    ) -> Result<Mutation, AppError> {
        let session = AuthGuard::require(session)?;
        let booking_id = parse_id("bookingId", &form.booking_id)?;

        self.authorize(session, booking_id).await?;

        BookingRepository::new(self.db)
            .delete(booking_id)
            .await
            .map_err(|e| AppError::persistence("Booking could not be deleted", e))?;

        self.view_cache.invalidate(RESERVATIONS_PATH).await;

        Ok(Mutation::DeleteReservation { booking_id })
    }

    /// Updates the guest count and observations of one of the signed-in guest's bookings.
    ///
    /// Observations longer than the limit are cut silently. The guest count is only
    /// validated once ownership is established, so a foreign booking is reported as not
    /// found whatever the other fields contain.
    ///
    /// # Returns
    /// - `Ok(Mutation::UpdateReservation)` - Booking updated, edit view invalidated
    /// - `Err(AppError::AuthErr(Unauthenticated))` - No session
    /// - `Err(AppError::InvalidInput)` - `bookingId` is not an id, or `numGuests` is not a
    ///   positive whole number
    /// - `Err(AppError::NotFound)` - Booking is not owned by the guest; nothing was written
    /// - `Err(AppError::Persistence)` - The update failed
    pub async fn update_reservation(
        &self,
        session: Option<&GuestSession>,
        form: &UpdateReservationForm,
    ) -> Result<Mutation, AppError> {
        let session = AuthGuard::require(session)?;
        let booking_id = parse_id("bookingId", &form.booking_id)?;

        self.authorize(session, booking_id).await?;

        let num_guests = parse_positive("numGuests", &form.num_guests)?;
        let params = UpdateBookingParams {
            num_guests,
            observations: truncate_observations(&form.observations),
        };

        BookingRepository::new(self.db)
            .update(booking_id, params)
            .await
            .map_err(|e| AppError::persistence("Reservation could not be updated", e))?;

        self.view_cache.invalidate(&edit_path(booking_id)).await;

        Ok(Mutation::UpdateReservation { booking_id })
    }

    async fn authorize(&self, session: &GuestSession, booking_id: i32) -> Result<(), AppError> {
        if !self.ownership.owns(session, booking_id).await? {
            return Err(not_found());
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Booking not found".to_string())
}
