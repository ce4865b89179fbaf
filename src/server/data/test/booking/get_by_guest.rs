use super::*;

/// Tests listing only the bookings owned by one guest.
///
/// Expected: the guest's bookings ordered by start date, none belonging to others
#[tokio::test]
async fn returns_only_guest_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;
    let other = factory::create_guest(db).await?;
    let cabin = factory::create_cabin(db).await?;

    let later = factory::booking::BookingFactory::new(db, guest.id, cabin.id)
        .start_date(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
        .build()
        .await?;
    let earlier = factory::booking::BookingFactory::new(db, guest.id, cabin.id)
        .start_date(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap())
        .build()
        .await?;
    factory::create_booking(db, other.id, cabin.id).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_by_guest(guest.id).await?;

    let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}

/// Tests listing bookings for a guest without any.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_guest_without_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;

    let repo = BookingRepository::new(db);
    assert!(repo.get_by_guest(guest.id).await?.is_empty());

    Ok(())
}

/// Tests that reservations carry the cabin name.
///
/// Expected: one reservation per booking, named after its cabin
#[tokio::test]
async fn joins_cabin_name_into_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;
    let cabin = factory::cabin::CabinFactory::new(db)
        .name("Lakeside")
        .build()
        .await?;
    let booking = factory::create_booking(db, guest.id, cabin.id).await?;

    let repo = BookingRepository::new(db);
    let reservations = repo.get_reservations_by_guest(guest.id).await?;

    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].booking.id, booking.id);
    assert_eq!(reservations[0].cabin_name, "Lakeside");

    Ok(())
}
