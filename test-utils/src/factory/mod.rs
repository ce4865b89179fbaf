//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*` shorthand that
//! inserts a row with defaults. Foreign keys are enforced by SQLite, so bookings need their
//! guest and cabin inserted first; `helpers` does that in one call.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let guest = factory::guest::GuestFactory::new(&db).id(42).build().await?;
//! let cabin = factory::create_cabin(&db).await?;
//! let booking = factory::booking::BookingFactory::new(&db, guest.id, cabin.id)
//!     .id(7)
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod cabin;
pub mod guest;
pub mod helpers;

pub use booking::create_booking;
pub use cabin::create_cabin;
pub use guest::create_guest;
