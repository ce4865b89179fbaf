//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. Every guest-scoped mutation
//! takes the request's principal explicitly as `Option<&GuestSession>` and runs the same
//! steps: authenticate, authorize, validate, persist, invalidate. Mutations return the
//! `Mutation` they performed; deciding where to navigate next is left to `navigation`.

pub mod auth;
pub mod booking;
pub mod cabin;
pub mod guest;
pub mod oauth;
pub mod ownership;
pub mod reservation;
pub mod view_cache;

#[cfg(test)]
mod test;
