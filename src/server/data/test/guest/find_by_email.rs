use super::*;

/// Tests finding a guest by email.
///
/// Expected: Ok(Some) for a known email, Ok(None) otherwise
#[tokio::test]
async fn finds_guest_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::guest::GuestFactory::new(db)
        .email("lena@example.com")
        .build()
        .await?;

    let repo = GuestRepository::new(db);

    let found = repo.find_by_email("lena@example.com").await?;
    assert_eq!(found.map(|g| g.id), Some(guest.id));

    let missing = repo.find_by_email("nobody@example.com").await?;
    assert!(missing.is_none());

    Ok(())
}
