use sea_orm::DatabaseConnection;

use crate::{
    model::booking::CreateBookingForm,
    server::{
        data::booking::BookingRepository,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{booking::CreateBookingParams, session::GuestSession},
        navigation::Mutation,
        service::view_cache::ViewCache,
        util::{
            parse::{parse_date, parse_id, parse_non_negative, parse_positive},
            validate::truncate_observations,
        },
    },
};

/// Path of a cabin's detail page, which shows the dates already booked.
pub fn cabin_path(cabin_id: i32) -> String {
    format!("/cabins/{}", cabin_id)
}

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    view_cache: &'a ViewCache,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection, view_cache: &'a ViewCache) -> Self {
        Self { db, view_cache }
    }

    /// Books a cabin for the signed-in guest.
    ///
    /// The total price is the submitted cabin price. The new booking is unconfirmed and
    /// unpaid, without breakfast or extras, whatever else the form contains.
    ///
    /// # Returns
    /// - `Ok(Mutation::CreateBooking)` - Booking stored, cabin page invalidated
    /// - `Err(AppError::AuthErr(Unauthenticated))` - No session
    /// - `Err(AppError::InvalidInput)` - A field is malformed or the dates are out of order
    /// - `Err(AppError::Persistence)` - The insert failed
    pub async fn create_booking(
        &self,
        session: Option<&GuestSession>,
        cabin_id: &str,
        form: &CreateBookingForm,
    ) -> Result<Mutation, AppError> {
        let session = AuthGuard::require(session)?;
        let params = Self::parse_form(session, cabin_id, form)?;
        let cabin_id = params.cabin_id;

        let booking = BookingRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::persistence("Booking could not be created", e))?;

        tracing::info!(
            booking_id = booking.id,
            guest_id = session.guest_id,
            cabin_id,
            "Created booking"
        );

        self.view_cache.invalidate(&cabin_path(cabin_id)).await;

        Ok(Mutation::CreateBooking {
            booking_id: booking.id,
            cabin_id,
        })
    }

    fn parse_form(
        session: &GuestSession,
        cabin_id: &str,
        form: &CreateBookingForm,
    ) -> Result<CreateBookingParams, AppError> {
        let start_date = parse_date("startDate", &form.start_date)?;
        let end_date = parse_date("endDate", &form.end_date)?;

        if end_date <= start_date {
            tracing::warn!(%start_date, %end_date, "Rejected booking dates");
            return Err(AppError::InvalidInput(
                "endDate must be after startDate".to_string(),
            ));
        }

        Ok(CreateBookingParams {
            guest_id: session.guest_id,
            cabin_id: parse_id("cabinId", cabin_id)?,
            start_date,
            end_date,
            num_nights: parse_positive("numNights", &form.num_nights)?,
            num_guests: parse_positive("numGuests", &form.num_guests)?,
            cabin_price: parse_non_negative("cabinPrice", &form.cabin_price)?,
            observations: truncate_observations(&form.observations),
        })
    }
}
