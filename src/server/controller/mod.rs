//! HTTP handlers.
//!
//! Handlers extract the form, the session and the application state, hand the request's
//! principal to a service and turn its outcome into a response. Mutations answer with a
//! redirect to their navigation target, or `204 No Content` when the guest stays on the
//! page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::server::navigation::{next_target, Mutation};

pub mod account;
pub mod auth;
pub mod cabin;

fn navigate(mutation: &Mutation) -> Response {
    match next_target(mutation) {
        Some(target) => Redirect::to(target).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
