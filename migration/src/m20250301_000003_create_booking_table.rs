use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250301_000001_create_guest_table::Guest, m20250301_000002_create_cabin_table::Cabin};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(Booking::GuestId))
                    .col(integer(Booking::CabinId))
                    .col(date(Booking::StartDate))
                    .col(date(Booking::EndDate))
                    .col(integer(Booking::NumNights))
                    .col(integer(Booking::NumGuests))
                    .col(integer(Booking::CabinPrice))
                    .col(integer(Booking::ExtrasPrice).default(0))
                    .col(integer(Booking::TotalPrice))
                    .col(text(Booking::Observations).default(""))
                    .col(boolean(Booking::IsPaid).default(false))
                    .col(boolean(Booking::HasBreakfast).default(false))
                    .col(string(Booking::Status).default("unconfirmed"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_guest_id")
                            .from(Booking::Table, Booking::GuestId)
                            .to(Guest::Table, Guest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_cabin_id")
                            .from(Booking::Table, Booking::CabinId)
                            .to(Cabin::Table, Cabin::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_guest_id")
                    .table(Booking::Table)
                    .col(Booking::GuestId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    #[sea_orm(iden = "bookings")]
    Table,
    Id,
    CreatedAt,
    GuestId,
    CabinId,
    StartDate,
    EndDate,
    NumNights,
    NumGuests,
    CabinPrice,
    ExtrasPrice,
    TotalPrice,
    Observations,
    IsPaid,
    HasBreakfast,
    Status,
}
