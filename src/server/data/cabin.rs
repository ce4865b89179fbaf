//! Cabin data repository. Cabins are only ever read by this service.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::cabin::Cabin;

pub struct CabinRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CabinRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all cabins ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Cabin>)` - Every cabin, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Cabin>, DbErr> {
        let cabins = entity::prelude::Cabin::find()
            .order_by_asc(entity::cabin::Column::Name)
            .all(self.db)
            .await?;

        Ok(cabins.into_iter().map(Cabin::from_entity).collect())
    }

    /// Gets a cabin by id.
    ///
    /// # Arguments
    /// - `id` - Cabin id
    ///
    /// # Returns
    /// - `Ok(Some(Cabin))` - Cabin found
    /// - `Ok(None)` - No cabin with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Cabin>, DbErr> {
        let cabin = entity::prelude::Cabin::find_by_id(id).one(self.db).await?;

        Ok(cabin.map(Cabin::from_entity))
    }
}
