//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into
//! DTOs at the controller boundary. Parameter types carry already-validated input from the
//! service layer down to the repositories.

pub mod booking;
pub mod cabin;
pub mod guest;
pub mod session;
