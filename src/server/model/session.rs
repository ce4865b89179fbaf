//! The authenticated principal of a request.

use serde::{Deserialize, Serialize};

use crate::model::session::SessionDto;

/// The guest signed in for the current request.
///
/// Stored in the tower session at sign-in and read back by `AuthSession::current()`.
/// Pipeline operations receive it explicitly as `Option<&GuestSession>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSession {
    /// Id of the guest row every mutation is scoped to.
    pub guest_id: i32,
    pub full_name: String,
    pub email: String,
}

impl GuestSession {
    pub fn into_dto(self) -> SessionDto {
        SessionDto {
            guest_id: self.guest_id,
            full_name: self.full_name,
            email: self.email,
        }
    }
}
