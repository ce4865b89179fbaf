//! Guest domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::guest::GuestDto;

/// A guest account with its profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Guest {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub full_name: String,
    pub email: String,
    /// Passport or ID card number; always matches `^[A-Za-z0-9]{6,12}$` once set.
    pub national_id: Option<String>,
    pub nationality: Option<String>,
    /// Country code used to pick the flag image, e.g. `"pt"`.
    pub country_flag: Option<String>,
}

impl Guest {
    /// Converts an entity model to a guest domain model at the repository boundary.
    pub fn from_entity(entity: entity::guest::Model) -> Self {
        Self {
            id: entity.id,
            created_at: entity.created_at,
            full_name: entity.full_name,
            email: entity.email,
            national_id: entity.national_id,
            nationality: entity.nationality,
            country_flag: entity.country_flag,
        }
    }

    pub fn into_dto(self) -> GuestDto {
        GuestDto {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            national_id: self.national_id,
            nationality: self.nationality,
            country_flag: self.country_flag,
        }
    }
}

/// Parameters for registering a guest on first sign-in.
#[derive(Debug, Clone)]
pub struct CreateGuestParams {
    pub full_name: String,
    pub email: String,
}

/// Validated profile update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateGuestParams {
    pub national_id: String,
    pub nationality: String,
    pub country_flag: String,
}
