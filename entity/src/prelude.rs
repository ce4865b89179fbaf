pub use super::booking::Entity as Booking;
pub use super::cabin::Entity as Cabin;
pub use super::guest::Entity as Guest;
