use super::*;

/// Tests loading an owned booking for the edit form.
///
/// Expected: the booking with its cabin's capacity
#[tokio::test]
async fn loads_owned_booking_with_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ViewCache::new();

    let guest = factory::create_guest(db).await?;
    let cabin = factory::cabin::CabinFactory::new(db)
        .max_capacity(6)
        .build()
        .await?;
    let booking = factory::create_booking(db, guest.id, cabin.id).await?;

    let editable = ReservationService::new(db, &cache)
        .get_for_edit(Some(&session_for(&guest)), booking.id)
        .await?;

    assert_eq!(editable.booking.id, booking.id);
    assert_eq!(editable.max_capacity, 6);

    Ok(())
}

/// Tests loading another guest's booking for editing.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn hides_foreign_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ViewCache::new();

    let (guest, _, foreign) = seed_two_guests(db).await?;

    let result = ReservationService::new(db, &cache)
        .get_for_edit(Some(&session_for(&guest)), foreign.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing reservations.
///
/// Expected: only the session guest's bookings
#[tokio::test]
async fn lists_only_own_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ViewCache::new();

    let (guest, owned, _) = seed_two_guests(db).await?;

    let reservations = ReservationService::new(db, &cache)
        .list(Some(&session_for(&guest)))
        .await?;

    let ids: Vec<i32> = reservations.iter().map(|r| r.booking.id).collect();
    assert_eq!(ids, vec![owned.id]);

    Ok(())
}

/// Tests loading a booking for editing after the guest deleted it.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn deleted_booking_is_not_editable() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ViewCache::new();

    let (guest, _, _) = seed_two_guests(db).await?;
    let service = ReservationService::new(db, &cache);
    let session = session_for(&guest);

    service.get_for_edit(Some(&session), 7).await?;
    service
        .delete_reservation(Some(&session), &delete_form("7"))
        .await?;

    let result = service.get_for_edit(Some(&session), 7).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
