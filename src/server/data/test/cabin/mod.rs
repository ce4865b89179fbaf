use crate::server::data::cabin::CabinRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests listing cabins.
///
/// Expected: all cabins ordered by name
#[tokio::test]
async fn gets_all_cabins_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Cabin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::cabin::CabinFactory::new(db).name("008").build().await?;
    factory::cabin::CabinFactory::new(db).name("001").build().await?;

    let repo = CabinRepository::new(db);
    let cabins = repo.get_all().await?;

    let names: Vec<&str> = cabins.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["001", "008"]);

    Ok(())
}

/// Tests fetching a single cabin.
///
/// Expected: Ok(Some) for an existing id, Ok(None) otherwise
#[tokio::test]
async fn gets_cabin_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Cabin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cabin = factory::cabin::CabinFactory::new(db)
        .max_capacity(6)
        .price(400)
        .build()
        .await?;

    let repo = CabinRepository::new(db);

    let found = repo.get_by_id(cabin.id).await?.unwrap();
    assert_eq!(found.max_capacity, 6);
    assert_eq!(found.price, 400);

    assert!(repo.get_by_id(cabin.id + 100).await?.is_none());

    Ok(())
}
