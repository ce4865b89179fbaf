use super::*;

/// Tests deleting an owned booking, then a booking the guest does not own.
///
/// Guest 42 owns booking 7. Deleting 7 removes it and invalidates the reservation list;
/// deleting 99 fails with not found and writes nothing.
///
/// Expected: Ok then Err(NotFound)
#[tokio::test]
async fn deletes_owned_booking_and_rejects_foreign_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ViewCache::new();

    let (guest, _, _) = seed_two_guests(db).await?;
    let session = session_for(&guest);
    let service = ReservationService::new(db, &cache);
    let repo = BookingRepository::new(db);

    cache
        .insert("/account/reservations", Some(42), json!([7]))
        .await;

    let mutation = service
        .delete_reservation(Some(&session), &delete_form("7"))
        .await?;

    assert_eq!(mutation, Mutation::DeleteReservation { booking_id: 7 });
    assert!(repo.get_by_id(7).await?.is_none());
    assert!(cache.get("/account/reservations", Some(42)).await.is_none());

    cache.insert("/account/reservations", Some(42), json!([])).await;

    let result = service
        .delete_reservation(Some(&session), &delete_form("99"))
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Booking not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(repo.get_by_id(99).await?.is_some());
    assert!(cache.get("/account/reservations", Some(42)).await.is_some());

    Ok(())
}

/// Tests deleting an id that does not exist at all.
///
/// Expected: Err(NotFound), same as a booking owned by someone else
#[tokio::test]
async fn rejects_unknown_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ViewCache::new();

    let (guest, _, _) = seed_two_guests(db).await?;

    let result = ReservationService::new(db, &cache)
        .delete_reservation(Some(&session_for(&guest)), &delete_form("12345"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a malformed booking id is rejected as invalid input.
///
/// Expected: Err(InvalidInput) and no booking deleted
#[tokio::test]
async fn rejects_malformed_booking_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ViewCache::new();

    let (guest, owned, _) = seed_two_guests(db).await?;

    for booking_id in ["", "seven", "7abc"] {
        let result = ReservationService::new(db, &cache)
            .delete_reservation(Some(&session_for(&guest)), &delete_form(booking_id))
            .await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
    assert!(BookingRepository::new(db).get_by_id(owned.id).await?.is_some());

    Ok(())
}

/// Ownership check that never grants access.
struct DenyAll;

impl OwnershipCheck for DenyAll {
    async fn owns(&self, _session: &GuestSession, _booking_id: i32) -> Result<bool, DbErr> {
        Ok(false)
    }
}

/// Tests that the service defers entirely to its ownership check.
///
/// Expected: Err(NotFound) even for the guest's own booking
#[tokio::test]
async fn uses_injected_ownership_check() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ViewCache::new();

    let (guest, owned, _) = seed_two_guests(db).await?;

    let result = ReservationService::with_ownership(db, &cache, DenyAll)
        .delete_reservation(Some(&session_for(&guest)), &delete_form("7"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(BookingRepository::new(db).get_by_id(owned.id).await?.is_some());

    Ok(())
}
