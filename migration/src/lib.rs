pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_guest_table;
mod m20250301_000002_create_cabin_table;
mod m20250301_000003_create_booking_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_guest_table::Migration),
            Box::new(m20250301_000002_create_cabin_table::Migration),
            Box::new(m20250301_000003_create_booking_table::Migration),
        ]
    }
}
