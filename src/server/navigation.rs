//! Where the browser goes after a mutation completes.
//!
//! Services perform a mutation and return a `Mutation` describing what happened; controllers
//! ask `next_target` where to send the guest. Keeping the redirect out of the services lets
//! them be tested without a router.

/// A mutation that completed successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    UpdateGuest { guest_id: i32 },
    DeleteReservation { booking_id: i32 },
    UpdateReservation { booking_id: i32 },
    CreateBooking { booking_id: i32, cabin_id: i32 },
    SignIn { guest_id: i32 },
    SignOut,
}

pub const ACCOUNT_PATH: &str = "/account";
pub const RESERVATIONS_PATH: &str = "/account/reservations";
pub const THANK_YOU_PATH: &str = "/cabins/thankyou";
pub const HOME_PATH: &str = "/";

/// Navigation target for a completed mutation.
///
/// `None` means the guest stays on the current page, which re-renders from the
/// invalidated view.
pub fn next_target(mutation: &Mutation) -> Option<&'static str> {
    match mutation {
        Mutation::UpdateReservation { .. } => Some(RESERVATIONS_PATH),
        Mutation::CreateBooking { .. } => Some(THANK_YOU_PATH),
        Mutation::SignIn { .. } => Some(ACCOUNT_PATH),
        Mutation::SignOut => Some(HOME_PATH),
        Mutation::UpdateGuest { .. } | Mutation::DeleteReservation { .. } => None,
    }
}
