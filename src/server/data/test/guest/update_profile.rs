use super::*;

fn params() -> UpdateGuestParams {
    UpdateGuestParams {
        national_id: "AB123456".to_string(),
        nationality: "Germany".to_string(),
        country_flag: "de".to_string(),
    }
}

/// Tests updating a guest's profile.
///
/// Expected: Ok(1) and the stored row carries the new profile
#[tokio::test]
async fn updates_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;

    let repo = GuestRepository::new(db);
    let rows = repo.update_profile(guest.id, params()).await?;
    assert_eq!(rows, 1);

    let updated = repo.find_by_id(guest.id).await?.unwrap();
    assert_eq!(updated.national_id.as_deref(), Some("AB123456"));
    assert_eq!(updated.nationality.as_deref(), Some("Germany"));
    assert_eq!(updated.country_flag.as_deref(), Some("de"));
    assert_eq!(updated.email, guest.email);

    Ok(())
}

/// Tests that only the targeted guest is updated.
///
/// Expected: other guests keep their profile
#[tokio::test]
async fn leaves_other_guests_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_guest(db).await?;
    let other = factory::guest::GuestFactory::new(db)
        .national_id("ZZ999999")
        .nationality("Portugal", "pt")
        .build()
        .await?;

    let repo = GuestRepository::new(db);
    repo.update_profile(target.id, params()).await?;

    let other = repo.find_by_id(other.id).await?.unwrap();
    assert_eq!(other.national_id.as_deref(), Some("ZZ999999"));
    assert_eq!(other.country_flag.as_deref(), Some("pt"));

    Ok(())
}

/// Tests updating a guest that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn affects_no_rows_for_missing_guest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuestRepository::new(db);
    let rows = repo.update_profile(999, params()).await?;

    assert_eq!(rows, 0);

    Ok(())
}
