use super::*;

/// Tests registering a guest on first sign-in.
///
/// Verifies the guest is stored with the provider's name and email and an empty profile.
///
/// Expected: Ok with profile fields unset
#[tokio::test]
async fn creates_guest_with_empty_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuestRepository::new(db);
    let guest = repo
        .create(CreateGuestParams {
            full_name: "Jonas Schmedtmann".to_string(),
            email: "jonas@example.com".to_string(),
        })
        .await?;

    assert_eq!(guest.full_name, "Jonas Schmedtmann");
    assert_eq!(guest.email, "jonas@example.com");
    assert!(guest.national_id.is_none());
    assert!(guest.nationality.is_none());
    assert!(guest.country_flag.is_none());

    let stored = entity::prelude::Guest::find_by_id(guest.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that emails are unique across guests.
///
/// Expected: Err when creating a second guest with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guest::GuestFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = GuestRepository::new(db);
    let result = repo
        .create(CreateGuestParams {
            full_name: "Someone Else".to_string(),
            email: "taken@example.com".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
