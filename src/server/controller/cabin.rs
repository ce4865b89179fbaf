use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, booking::CreateBookingForm, cabin::CabinDto},
    server::{
        controller::navigate,
        error::AppError,
        middleware::session::AuthSession,
        service::{
            booking::{cabin_path, BookingService},
            cabin::CabinService,
        },
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping cabin endpoints in OpenAPI documentation
pub static CABIN_TAG: &str = "cabin";

const CABINS_PATH: &str = "/cabins";

/// List all cabins.
///
/// Served from the view cache. Cabins are never written through this API.
///
/// # Returns
/// - `200 OK` - Every cabin, ordered by name
#[utoipa::path(
    get,
    path = "/api/cabins",
    tag = CABIN_TAG,
    responses(
        (status = 200, description = "All cabins", body = Vec<CabinDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cabins(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = &CabinService::new(&state.db);
    let view = state
        .view_cache
        .get_or_insert_with(CABINS_PATH, None, || async move {
            let cabins: Vec<CabinDto> = service
                .get_all()
                .await?
                .into_iter()
                .map(|cabin| cabin.into_dto())
                .collect();
            Ok(serde_json::to_value(cabins)?)
        })
        .await?;

    Ok(Json(view))
}

/// Get a single cabin.
///
/// Served from the view cache under `/cabins/{id}`, which a new booking invalidates.
///
/// # Returns
/// - `200 OK` - The cabin
/// - `400 Bad Request` - `id` is not an id
/// - `404 Not Found` - No cabin with that id
#[utoipa::path(
    get,
    path = "/api/cabins/{id}",
    tag = CABIN_TAG,
    params(
        ("id" = String, Path, description = "Cabin id")
    ),
    responses(
        (status = 200, description = "Cabin", body = CabinDto),
        (status = 400, description = "Malformed cabin id", body = ErrorDto),
        (status = 404, description = "Cabin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cabin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let cabin_id = parse_id("cabinId", &id)?;

    let service = &CabinService::new(&state.db);
    let view = state
        .view_cache
        .get_or_insert_with(&cabin_path(cabin_id), None, || async move {
            let cabin = service.get_by_id(cabin_id).await?;
            Ok(serde_json::to_value(cabin.into_dto())?)
        })
        .await?;

    Ok(Json(view))
}

/// Book a cabin for the signed-in guest.
///
/// The booking is created unconfirmed and unpaid, with the submitted cabin price as its
/// total.
///
/// # Returns
/// - `303 See Other` - Booked, redirect to /cabins/thankyou
/// - `400 Bad Request` - Malformed field or dates out of order
/// - `401 Unauthorized` - Not signed in
/// - `500 Internal Server Error` - "Booking could not be created"
#[utoipa::path(
    post,
    path = "/api/cabins/{id}/bookings",
    tag = CABIN_TAG,
    params(
        ("id" = String, Path, description = "Cabin id")
    ),
    request_body(content = CreateBookingForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Booked, redirect to the thank-you page"),
        (status = 400, description = "Malformed field", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Booking could not be created", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(form): Form<CreateBookingForm>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthSession::new(&session).current().await?;

    let mutation = BookingService::new(&state.db, &state.view_cache)
        .create_booking(principal.as_ref(), &id, &form)
        .await?;

    Ok(navigate(&mutation))
}
