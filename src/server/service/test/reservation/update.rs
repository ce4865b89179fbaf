use super::*;

/// Tests updating an owned booking.
///
/// Expected: guest count and observations stored, edit view invalidated, navigation to the
/// reservation list
#[tokio::test]
async fn updates_owned_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ViewCache::new();

    let (guest, owned, _) = seed_two_guests(db).await?;
    cache.insert(&edit_path(7), Some(42), json!({})).await;

    let mutation = ReservationService::new(db, &cache)
        .update_reservation(
            Some(&session_for(&guest)),
            &update_form("7", "Bringing a dog", "3"),
        )
        .await?;

    assert_eq!(mutation, Mutation::UpdateReservation { booking_id: 7 });
    assert_eq!(next_target(&mutation), Some("/account/reservations"));

    let updated = BookingRepository::new(db).get_by_id(owned.id).await?.unwrap();
    assert_eq!(updated.num_guests, 3);
    assert_eq!(updated.observations, "Bringing a dog");
    assert_eq!(updated.total_price, owned.total_price);

    assert!(cache.get("/account/reservations/edit/7", Some(42)).await.is_none());

    Ok(())
}

/// Tests that long observations are cut to the limit rather than rejected.
///
/// Expected: Ok with exactly the first 1000 characters stored
#[tokio::test]
async fn truncates_long_observations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ViewCache::new();

    let (guest, owned, _) = seed_two_guests(db).await?;
    let observations: String = ('a'..='z').cycle().take(1500).collect();

    ReservationService::new(db, &cache)
        .update_reservation(
            Some(&session_for(&guest)),
            &update_form("7", &observations, "2"),
        )
        .await?;

    let updated = BookingRepository::new(db).get_by_id(owned.id).await?.unwrap();
    assert_eq!(updated.observations.chars().count(), 1000);
    assert_eq!(updated.observations, observations[..1000]);

    Ok(())
}

/// Tests updating a booking owned by another guest.
///
/// Expected: Err(NotFound) and the foreign booking unchanged
#[tokio::test]
async fn rejects_foreign_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ViewCache::new();

    let (guest, _, foreign) = seed_two_guests(db).await?;

    let result = ReservationService::new(db, &cache)
        .update_reservation(
            Some(&session_for(&guest)),
            &update_form("99", "Mine now", "1"),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let unchanged = BookingRepository::new(db).get_by_id(foreign.id).await?.unwrap();
    assert_eq!(unchanged.observations, foreign.observations);
    assert_eq!(unchanged.num_guests, foreign.num_guests);

    Ok(())
}

/// Tests guest counts that are not positive whole numbers.
///
/// Expected: Err(InvalidInput) for each
#[tokio::test]
async fn rejects_invalid_guest_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ViewCache::new();

    let (guest, _, _) = seed_two_guests(db).await?;

    for num_guests in ["", "two", "0", "-1", "2.5"] {
        let result = ReservationService::new(db, &cache)
            .update_reservation(
                Some(&session_for(&guest)),
                &update_form("7", "", num_guests),
            )
            .await;

        assert!(
            matches!(result, Err(AppError::InvalidInput(_))),
            "{:?} should be rejected",
            num_guests
        );
    }

    Ok(())
}

/// Tests that form ids with surrounding whitespace match the stored numeric id.
///
/// Expected: Ok
#[tokio::test]
async fn compares_ids_numerically() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ViewCache::new();

    let (guest, _, _) = seed_two_guests(db).await?;

    let mutation = ReservationService::new(db, &cache)
        .update_reservation(Some(&session_for(&guest)), &update_form(" 7 ", "", "2"))
        .await?;

    assert_eq!(mutation, Mutation::UpdateReservation { booking_id: 7 });

    Ok(())
}

/// Tests that ownership is checked before the guest count is validated.
///
/// Expected: Err(NotFound) for a foreign booking whatever `numGuests` holds
#[tokio::test]
async fn foreign_booking_is_not_found_before_guest_count_is_checked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = ViewCache::new();

    let (guest, _, _) = seed_two_guests(db).await?;

    for num_guests in ["", "two", "0"] {
        let result = ReservationService::new(db, &cache)
            .update_reservation(
                Some(&session_for(&guest)),
                &update_form("99", "", num_guests),
            )
            .await;

        assert!(
            matches!(result, Err(AppError::NotFound(_))),
            "{:?} should not reach validation",
            num_guests
        );
    }

    Ok(())
}
