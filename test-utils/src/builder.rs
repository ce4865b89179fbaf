use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` (or the `with_booking_tables()` shortcut), then call
/// `build()` to create an in-memory SQLite database containing them.
///
/// A builder with no tables is useful on its own: any repository call made against it fails,
/// which lets a test prove an operation was rejected before touching persistence.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Guest, Cabin};
///
/// let test = TestBuilder::new()
///     .with_table(Guest)
///     .with_table(Cabin)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to generate the CREATE TABLE statement from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table used by the booking flows.
    ///
    /// Adds, in dependency order:
    /// - Guest
    /// - Cabin
    /// - Booking
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_booking_tables(self) -> Self {
        self.with_table(Guest).with_table(Cabin).with_table(Booking)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
