use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Test environment holding an in-memory database and a session stored in it.
///
/// Both are created lazily on first access and live as long as the context.
pub struct TestContext {
    /// In-memory SQLite connection, created by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the same SQLite database, created by `session()`.
    pub session: Option<Session>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates a new empty test context.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Executes the provided CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(db.get_database_backend().build(&stmt)).await?;
        }

        Ok(())
    }

    /// Gets or creates the test session.
    ///
    /// The first call migrates the tower-sessions SQLite store table into the test database
    /// and opens a fresh session with a seven day inactivity expiry, matching the server.
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestContext::new();
    /// let session = test.session().await?;
    ///
    /// session.insert("auth:guest", 42).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let pool = db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());

                session_store
                    .migrate()
                    .await
                    .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                let session_ref = self.session.insert(session);

                Ok(&*session_ref)
            }
        }
    }

    /// Gets or creates both the database and the session.
    ///
    /// Avoids the double mutable borrow of calling `database()` and `session()` separately.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("test context was not initialized".to_string()).into()),
        }
    }
}
