//! Booking data repository for database operations.
//!
//! Ownership is not enforced here: every method acts on whatever id it is given. Callers
//! authorize first through `service::ownership`.

use chrono::Utc;
use entity::booking::BookingStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::booking::{
    Booking, CreateBookingParams, Reservation, UpdateBookingParams,
};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every booking owned by a guest, earliest stay first.
    ///
    /// Backs the ownership check of every reservation mutation.
    ///
    /// # Arguments
    /// - `guest_id` - Id of the owning guest
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - The guest's bookings, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_guest(&self, guest_id: i32) -> Result<Vec<Booking>, DbErr> {
        let bookings = entity::prelude::Booking::find()
            .filter(entity::booking::Column::GuestId.eq(guest_id))
            .order_by_asc(entity::booking::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(bookings.into_iter().map(Booking::from_entity).collect())
    }

    /// Gets a guest's bookings joined with the name of the cabin each is for.
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)` - The guest's bookings by start date, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_reservations_by_guest(&self, guest_id: i32) -> Result<Vec<Reservation>, DbErr> {
        let rows = entity::prelude::Booking::find()
            .find_also_related(entity::prelude::Cabin)
            .filter(entity::booking::Column::GuestId.eq(guest_id))
            .order_by_asc(entity::booking::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(booking, cabin)| Reservation {
                booking: Booking::from_entity(booking),
                cabin_name: cabin.map(|c| c.name).unwrap_or_default(),
            })
            .collect())
    }

    /// Gets a booking by id regardless of owner.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking found
    /// - `Ok(None)` - No booking with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(booking.map(Booking::from_entity))
    }

    /// Inserts a new booking.
    ///
    /// The booking starts unconfirmed and unpaid, without breakfast or extras, and its total
    /// price is the cabin price.
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            created_at: ActiveValue::Set(Utc::now()),
            guest_id: ActiveValue::Set(params.guest_id),
            cabin_id: ActiveValue::Set(params.cabin_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            num_nights: ActiveValue::Set(params.num_nights),
            num_guests: ActiveValue::Set(params.num_guests),
            cabin_price: ActiveValue::Set(params.cabin_price),
            extras_price: ActiveValue::Set(0),
            total_price: ActiveValue::Set(params.cabin_price),
            observations: ActiveValue::Set(params.observations),
            is_paid: ActiveValue::Set(false),
            has_breakfast: ActiveValue::Set(false),
            status: ActiveValue::Set(BookingStatus::Unconfirmed),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    /// Updates the guest-editable fields of a booking.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpdateBookingParams) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .set(entity::booking::ActiveModel {
                num_guests: ActiveValue::Set(params.num_guests),
                observations: ActiveValue::Set(params.observations),
                ..Default::default()
            })
            .filter(entity::booking::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a booking.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted; `0` when the booking did not exist
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
