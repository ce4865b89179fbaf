//! Cabin factory for creating test cabin entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cabins with customizable fields.
pub struct CabinFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    max_capacity: i32,
    price: i32,
    discount: i32,
}

impl<'a> CabinFactory<'a> {
    /// Creates a new CabinFactory with default values.
    ///
    /// Defaults:
    /// - name: `"{n:03}"`
    /// - max_capacity: `4`
    /// - price: `250`
    /// - discount: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("{:03}", next_id()),
            max_capacity: 4,
            price: 250,
            discount: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn max_capacity(mut self, max_capacity: i32) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    pub fn discount(mut self, discount: i32) -> Self {
        self.discount = discount;
        self
    }

    /// Builds and inserts the cabin entity into the database.
    pub async fn build(self) -> Result<entity::cabin::Model, DbErr> {
        entity::cabin::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            max_capacity: ActiveValue::Set(self.max_capacity),
            price: ActiveValue::Set(self.price),
            discount: ActiveValue::Set(self.discount),
            description: ActiveValue::Set("A cozy cabin in the woods".to_string()),
            image: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a cabin with default values.
pub async fn create_cabin(db: &DatabaseConnection) -> Result<entity::cabin::Model, DbErr> {
    CabinFactory::new(db).build().await
}
