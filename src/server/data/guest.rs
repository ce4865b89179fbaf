//! Guest data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::guest::{CreateGuestParams, Guest, UpdateGuestParams};

/// Repository providing database operations for guest accounts.
pub struct GuestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a guest by id.
    ///
    /// # Returns
    /// - `Ok(Some(Guest))` - Guest found
    /// - `Ok(None)` - No guest with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Guest>, DbErr> {
        let entity = entity::prelude::Guest::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Guest::from_entity))
    }

    /// Finds a guest by the email their identity provider reports.
    ///
    /// # Returns
    /// - `Ok(Some(Guest))` - A guest is registered under that email
    /// - `Ok(None)` - No guest with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Guest>, DbErr> {
        let entity = entity::prelude::Guest::find()
            .filter(entity::guest::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Guest::from_entity))
    }

    /// Creates a guest with an empty profile.
    ///
    /// National ID, nationality and flag stay empty until the guest updates their profile.
    ///
    /// # Returns
    /// - `Ok(Guest)` - The created guest
    /// - `Err(DbErr)` - Database error during insert, e.g. a duplicate email
    pub async fn create(&self, params: CreateGuestParams) -> Result<Guest, DbErr> {
        let entity = entity::guest::ActiveModel {
            created_at: ActiveValue::Set(Utc::now()),
            full_name: ActiveValue::Set(params.full_name),
            email: ActiveValue::Set(params.email),
            national_id: ActiveValue::Set(None),
            nationality: ActiveValue::Set(None),
            country_flag: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Guest::from_entity(entity))
    }

    /// Overwrites the profile fields of the guest with the given id.
    ///
    /// Filters by id rather than loading the row first, so updating a guest that does not
    /// exist affects no rows and is not an error.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(&self, id: i32, params: UpdateGuestParams) -> Result<u64, DbErr> {
        let result = entity::prelude::Guest::update_many()
            .set(entity::guest::ActiveModel {
                national_id: ActiveValue::Set(Some(params.national_id)),
                nationality: ActiveValue::Set(Some(params.nationality)),
                country_flag: ActiveValue::Set(Some(params.country_flag)),
                ..Default::default()
            })
            .filter(entity::guest::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
