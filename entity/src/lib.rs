//! SeaORM entities for the cabin booking database.

pub mod booking;
pub mod cabin;
pub mod guest;
pub mod prelude;
