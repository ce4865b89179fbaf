use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle of a booking. Stored as its kebab-case name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    #[sea_orm(string_value = "unconfirmed")]
    Unconfirmed,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "checked-in")]
    CheckedIn,
    #[sea_orm(string_value = "checked-out")]
    CheckedOut,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeUtc,
    pub guest_id: i32,
    pub cabin_id: i32,
    pub start_date: Date,
    pub end_date: Date,
    pub num_nights: i32,
    pub num_guests: i32,
    pub cabin_price: i32,
    pub extras_price: i32,
    pub total_price: i32,
    #[sea_orm(column_type = "Text")]
    pub observations: String,
    pub is_paid: bool,
    pub has_breakfast: bool,
    pub status: BookingStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guest::Entity",
        from = "Column::GuestId",
        to = "super::guest::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Guest,
    #[sea_orm(
        belongs_to = "super::cabin::Entity",
        from = "Column::CabinId",
        to = "super::cabin::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Cabin,
}

impl Related<super::guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guest.def()
    }
}

impl Related<super::cabin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cabin.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
