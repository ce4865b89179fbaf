//! Cabin domain model. Cabins are read-only reference data.

use crate::model::cabin::CabinDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Cabin {
    pub id: i32,
    pub name: String,
    pub max_capacity: i32,
    pub price: i32,
    pub discount: i32,
    pub description: String,
    pub image: Option<String>,
}

impl Cabin {
    pub fn from_entity(entity: entity::cabin::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            max_capacity: entity.max_capacity,
            price: entity.price,
            discount: entity.discount,
            description: entity.description,
            image: entity.image,
        }
    }

    pub fn into_dto(self) -> CabinDto {
        CabinDto {
            id: self.id,
            name: self.name,
            max_capacity: self.max_capacity,
            price: self.price,
            discount: self.discount,
            description: self.description,
            image: self.image,
        }
    }
}
