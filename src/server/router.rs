use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{account, auth, cabin},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Cabin Booking API"),
    tags(
        (name = "auth", description = "Google sign-in and the guest session"),
        (name = "account", description = "Guest profile and reservations"),
        (name = "cabin", description = "Cabins and new bookings"),
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout, auth::logout_form))
        .routes(routes!(auth::get_session))
        .routes(routes!(account::get_profile, account::update_profile))
        .routes(routes!(account::get_reservations))
        .routes(routes!(account::delete_reservation))
        .routes(routes!(account::get_reservation_for_edit))
        .routes(routes!(account::update_reservation))
        .routes(routes!(cabin::get_cabins))
        .routes(routes!(cabin::get_cabin))
        .routes(routes!(cabin::create_booking))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
