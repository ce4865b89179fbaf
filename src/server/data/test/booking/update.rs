use super::*;

/// Tests updating the guest-editable fields of a booking.
///
/// Expected: Ok(1), new guest count and observations stored, everything else unchanged
#[tokio::test]
async fn updates_guest_count_and_observations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let rows = repo
        .update(
            booking.id,
            UpdateBookingParams {
                num_guests: 3,
                observations: "Bringing a dog".to_string(),
            },
        )
        .await?;
    assert_eq!(rows, 1);

    let updated = repo.get_by_id(booking.id).await?.unwrap();
    assert_eq!(updated.num_guests, 3);
    assert_eq!(updated.observations, "Bringing a dog");
    assert_eq!(updated.total_price, booking.total_price);
    assert_eq!(updated.status, booking.status);

    Ok(())
}

/// Tests updating a booking that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn updates_nothing_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let rows = repo
        .update(
            7,
            UpdateBookingParams {
                num_guests: 1,
                observations: String::new(),
            },
        )
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
