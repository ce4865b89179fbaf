//! Read-only access to cabins.

use sea_orm::DatabaseConnection;

use crate::server::{data::cabin::CabinRepository, error::AppError, model::cabin::Cabin};

pub struct CabinService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CabinService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all cabins ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Cabin>)` - Every cabin, possibly empty
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_all(&self) -> Result<Vec<Cabin>, AppError> {
        Ok(CabinRepository::new(self.db).get_all().await?)
    }

    /// Gets a single cabin.
    ///
    /// # Arguments
    /// - `id` - Cabin id, already parsed from the path
    ///
    /// # Returns
    /// - `Ok(Cabin)` - The cabin
    /// - `Err(AppError::NotFound)` - No cabin with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Cabin, AppError> {
        CabinRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cabin not found".to_string()))
    }
}
