use super::*;
use crate::{
    model::booking::{DeleteReservationForm, UpdateReservationForm},
    server::{
        data::booking::BookingRepository,
        service::{
            ownership::OwnershipCheck,
            reservation::{edit_path, ReservationService},
        },
    },
};
use sea_orm::{DatabaseConnection, DbErr};

mod delete;
mod get_for_edit;
mod update;

/// Seeds guest 42 owning booking 7, and another guest owning booking 99.
async fn seed_two_guests(
    db: &DatabaseConnection,
) -> Result<(entity::guest::Model, entity::booking::Model, entity::booking::Model), DbErr> {
    let guest = factory::guest::GuestFactory::new(db).id(42).build().await?;
    let other = factory::create_guest(db).await?;
    let cabin = factory::create_cabin(db).await?;

    let owned = factory::booking::BookingFactory::new(db, guest.id, cabin.id)
        .id(7)
        .build()
        .await?;
    let foreign = factory::booking::BookingFactory::new(db, other.id, cabin.id)
        .id(99)
        .build()
        .await?;

    Ok((guest, owned, foreign))
}

fn delete_form(booking_id: &str) -> DeleteReservationForm {
    DeleteReservationForm {
        booking_id: booking_id.to_string(),
    }
}

fn update_form(booking_id: &str, observations: &str, num_guests: &str) -> UpdateReservationForm {
    UpdateReservationForm {
        booking_id: booking_id.to_string(),
        observations: observations.to_string(),
        num_guests: num_guests.to_string(),
    }
}
