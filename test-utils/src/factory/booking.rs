//! Booking factory for creating test booking entities.

use chrono::{Days, NaiveDate, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// The guest and cabin referenced must already exist.
///
/// # Example
///
/// ```rust,ignore
/// let booking = BookingFactory::new(&db, guest.id, cabin.id)
///     .id(7)
///     .num_guests(2)
///     .status(BookingStatus::Confirmed)
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    guest_id: i32,
    cabin_id: i32,
    start_date: NaiveDate,
    num_nights: i32,
    num_guests: i32,
    cabin_price: i32,
    observations: String,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - start_date: 30 days from today, 3 nights
    /// - num_guests: `2`
    /// - cabin_price: `750`
    /// - observations: empty
    /// - status: `Unconfirmed`
    pub fn new(db: &'a DatabaseConnection, guest_id: i32, cabin_id: i32) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            id: None,
            guest_id,
            cabin_id,
            start_date: today.checked_add_days(Days::new(30)).unwrap_or(today),
            num_nights: 3,
            num_guests: 2,
            cabin_price: 750,
            observations: String::new(),
            status: BookingStatus::Unconfirmed,
        }
    }

    /// Forces a specific primary key.
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn num_nights(mut self, num_nights: i32) -> Self {
        self.num_nights = num_nights;
        self
    }

    pub fn num_guests(mut self, num_guests: i32) -> Self {
        self.num_guests = num_guests;
        self
    }

    pub fn cabin_price(mut self, cabin_price: i32) -> Self {
        self.cabin_price = cabin_price;
        self
    }

    pub fn observations(mut self, observations: impl Into<String>) -> Self {
        self.observations = observations.into();
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let end_date = self
            .start_date
            .checked_add_days(Days::new(self.num_nights.max(0) as u64))
            .unwrap_or(self.start_date);

        entity::booking::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            created_at: ActiveValue::Set(Utc::now()),
            guest_id: ActiveValue::Set(self.guest_id),
            cabin_id: ActiveValue::Set(self.cabin_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(end_date),
            num_nights: ActiveValue::Set(self.num_nights),
            num_guests: ActiveValue::Set(self.num_guests),
            cabin_price: ActiveValue::Set(self.cabin_price),
            extras_price: ActiveValue::Set(0),
            total_price: ActiveValue::Set(self.cabin_price),
            observations: ActiveValue::Set(self.observations),
            is_paid: ActiveValue::Set(false),
            has_breakfast: ActiveValue::Set(false),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values for the given guest and cabin.
pub async fn create_booking(
    db: &DatabaseConnection,
    guest_id: i32,
    cabin_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, guest_id, cabin_id).build().await
}
