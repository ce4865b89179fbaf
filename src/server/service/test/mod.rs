use crate::server::{
    error::{auth::AuthError, AppError},
    model::session::GuestSession,
    navigation::{next_target, Mutation},
    service::view_cache::ViewCache,
};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod reservation;

fn session_for(guest: &entity::guest::Model) -> GuestSession {
    GuestSession {
        guest_id: guest.id,
        full_name: guest.full_name.clone(),
        email: guest.email.clone(),
    }
}
