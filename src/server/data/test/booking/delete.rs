use super::*;

/// Tests deleting an existing booking.
///
/// Expected: Ok(1) and the row is gone
#[tokio::test]
async fn deletes_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let rows = repo.delete(booking.id).await?;

    assert_eq!(rows, 1);
    assert!(repo.get_by_id(booking.id).await?.is_none());

    Ok(())
}

/// Tests deleting a booking id that does not exist.
///
/// Expected: Ok(0) and existing bookings are untouched
#[tokio::test]
async fn deletes_nothing_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let rows = repo.delete(booking.id + 1000).await?;

    assert_eq!(rows, 0);
    assert!(repo.get_by_id(booking.id).await?.is_some());

    Ok(())
}
