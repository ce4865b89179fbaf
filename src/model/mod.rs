//! Serializable request and response types shared by the HTTP layer.

pub mod api;
pub mod booking;
pub mod cabin;
pub mod guest;
pub mod session;
