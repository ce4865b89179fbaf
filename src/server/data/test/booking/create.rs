use super::*;

/// Tests creating a booking from a guest's reservation request.
///
/// Verifies the fixed defaults applied to every new booking: unconfirmed, unpaid, no
/// breakfast, no extras and a total equal to the cabin price.
///
/// Expected: Ok with defaults applied
#[tokio::test]
async fn creates_booking_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;
    let cabin = factory::create_cabin(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(CreateBookingParams {
            guest_id: guest.id,
            cabin_id: cabin.id,
            start_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 7, 4).unwrap(),
            num_nights: 3,
            num_guests: 2,
            cabin_price: 750,
            observations: "Arriving late".to_string(),
        })
        .await?;

    assert_eq!(booking.guest_id, guest.id);
    assert_eq!(booking.cabin_id, cabin.id);
    assert_eq!(booking.status, BookingStatus::Unconfirmed);
    assert_eq!(booking.extras_price, 0);
    assert_eq!(booking.total_price, 750);
    assert!(!booking.is_paid);
    assert!(!booking.has_breakfast);
    assert_eq!(booking.observations, "Arriving late");

    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.num_nights, 3);

    Ok(())
}

/// Tests that a booking cannot reference a cabin that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_cabin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .create(CreateBookingParams {
            guest_id: guest.id,
            cabin_id: 999,
            start_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 7, 2).unwrap(),
            num_nights: 1,
            num_guests: 1,
            cabin_price: 250,
            observations: String::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
