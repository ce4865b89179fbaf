use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub guest_id: i32,
    pub cabin_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_nights: i32,
    pub num_guests: i32,
    pub cabin_price: i32,
    pub extras_price: i32,
    pub total_price: i32,
    pub observations: String,
    pub is_paid: bool,
    pub has_breakfast: bool,
    /// One of `unconfirmed`, `confirmed`, `checked-in`, `checked-out`.
    pub status: String,
}

/// A booking in the guest's reservation list, with the cabin it is for.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub booking: BookingDto,
    pub cabin_name: String,
}

/// Data backing the reservation edit form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditReservationDto {
    pub booking: BookingDto,
    pub max_capacity: i32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReservationForm {
    #[serde(default)]
    pub booking_id: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationForm {
    #[serde(default)]
    pub booking_id: String,
    #[serde(default)]
    pub observations: String,
    #[serde(default)]
    pub num_guests: String,
}

/// Booking form from a cabin page.
///
/// The cabin id comes from the path. Dates and price are computed by the page from the
/// selected range and submitted alongside the guest's own fields.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingForm {
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub num_nights: String,
    #[serde(default)]
    pub cabin_price: String,
    #[serde(default)]
    pub num_guests: String,
    #[serde(default)]
    pub observations: String,
}
