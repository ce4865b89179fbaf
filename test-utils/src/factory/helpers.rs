//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a guest, a cabin and one booking owned by that guest for that cabin.
///
/// # Returns
/// - `Ok((guest, cabin, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::guest::Model,
        entity::cabin::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let guest = crate::factory::guest::create_guest(db).await?;
    let cabin = crate::factory::cabin::create_cabin(db).await?;
    let booking = crate::factory::booking::create_booking(db, guest.id, cabin.id).await?;

    Ok((guest, cabin, booking))
}
