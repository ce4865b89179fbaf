//! Cabin Booking Test Utils
//!
//! Shared testing utilities for the cabin booking service. Provides a builder for test
//! contexts backed by an in-memory SQLite database, a real `tower_sessions::Session` stored
//! in that same database, and factories for seeding guests, cabins and bookings.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_bookings() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new().with_booking_tables().build().await?;
//!     let (db, session) = test.db_and_session().await?;
//!
//!     let (guest, cabin, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
//!     // Perform operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
