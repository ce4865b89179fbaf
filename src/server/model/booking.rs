//! Booking domain models and parameters.
//!
//! A booking belongs to exactly one guest and one cabin. Guests may edit the observations
//! and guest count of their own bookings or delete them; the status is advanced by staff
//! tooling outside this service.

use chrono::{DateTime, NaiveDate, Utc};
use entity::booking::BookingStatus;

use crate::model::booking::{BookingDto, EditReservationDto, ReservationDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
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
    pub status: BookingStatus,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            created_at: entity.created_at,
            guest_id: entity.guest_id,
            cabin_id: entity.cabin_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            num_nights: entity.num_nights,
            num_guests: entity.num_guests,
            cabin_price: entity.cabin_price,
            extras_price: entity.extras_price,
            total_price: entity.total_price,
            observations: entity.observations,
            is_paid: entity.is_paid,
            has_breakfast: entity.has_breakfast,
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            created_at: self.created_at,
            guest_id: self.guest_id,
            cabin_id: self.cabin_id,
            start_date: self.start_date,
            end_date: self.end_date,
            num_nights: self.num_nights,
            num_guests: self.num_guests,
            cabin_price: self.cabin_price,
            extras_price: self.extras_price,
            total_price: self.total_price,
            observations: self.observations,
            is_paid: self.is_paid,
            has_breakfast: self.has_breakfast,
            status: status_name(self.status).to_string(),
        }
    }
}

/// Stored name of a status, matching the database representation.
pub fn status_name(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Unconfirmed => "unconfirmed",
        BookingStatus::Confirmed => "confirmed",
        BookingStatus::CheckedIn => "checked-in",
        BookingStatus::CheckedOut => "checked-out",
    }
}

/// A booking together with the cabin name, for the reservation list.
#[derive(Debug, Clone)]
pub struct Reservation {
    pub booking: Booking,
    pub cabin_name: String,
}

impl Reservation {
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            booking: self.booking.into_dto(),
            cabin_name: self.cabin_name,
        }
    }
}

/// A booking together with its cabin's capacity, for the edit form.
#[derive(Debug, Clone)]
pub struct EditableReservation {
    pub booking: Booking,
    pub max_capacity: i32,
}

impl EditableReservation {
    pub fn into_dto(self) -> EditReservationDto {
        EditReservationDto {
            booking: self.booking.into_dto(),
            max_capacity: self.max_capacity,
        }
    }
}

/// Validated fields for a new booking.
///
/// Status, payment, breakfast and extras are not part of the parameters: every new
/// booking starts unconfirmed, unpaid, without breakfast and with no extras.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookingParams {
    pub guest_id: i32,
    pub cabin_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_nights: i32,
    pub num_guests: i32,
    pub cabin_price: i32,
    pub observations: String,
}

/// Validated guest-editable fields of an existing booking.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBookingParams {
    pub num_guests: i32,
    pub observations: String,
}
