//! Guest factory for creating test guest entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guests with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let guest = GuestFactory::new(&db)
///     .id(42)
///     .email("jonas@example.com")
///     .national_id("AB123456")
///     .build()
///     .await?;
/// ```
pub struct GuestFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    full_name: String,
    email: String,
    national_id: Option<String>,
    nationality: Option<String>,
    country_flag: Option<String>,
}

impl<'a> GuestFactory<'a> {
    /// Creates a new GuestFactory with default values.
    ///
    /// Defaults:
    /// - id: assigned by the database
    /// - full_name: `"Guest {n}"`
    /// - email: `"guest{n}@example.com"`
    /// - profile fields: unset
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: None,
            full_name: format!("Guest {}", n),
            email: format!("guest{}@example.com", n),
            national_id: None,
            nationality: None,
            country_flag: None,
        }
    }

    /// Forces a specific primary key.
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn national_id(mut self, national_id: impl Into<String>) -> Self {
        self.national_id = Some(national_id.into());
        self
    }

    /// Sets nationality and country flag together, as the profile form does.
    pub fn nationality(mut self, nationality: impl Into<String>, flag: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self.country_flag = Some(flag.into());
        self
    }

    /// Builds and inserts the guest entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guest::Model)` - Created guest entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guest::Model, DbErr> {
        entity::guest::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            created_at: ActiveValue::Set(Utc::now()),
            full_name: ActiveValue::Set(self.full_name),
            email: ActiveValue::Set(self.email),
            national_id: ActiveValue::Set(self.national_id),
            nationality: ActiveValue::Set(self.nationality),
            country_flag: ActiveValue::Set(self.country_flag),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guest with default values.
///
/// Shorthand for `GuestFactory::new(db).build().await`.
pub async fn create_guest(db: &DatabaseConnection) -> Result<entity::guest::Model, DbErr> {
    GuestFactory::new(db).build().await
}
