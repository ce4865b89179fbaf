use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        booking::{
            DeleteReservationForm, EditReservationDto, ReservationDto, UpdateReservationForm,
        },
        guest::{GuestDto, UpdateGuestForm},
    },
    server::{
        controller::navigate,
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::{
            guest::{GuestService, PROFILE_PATH},
            reservation::ReservationService,
        },
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "account";

/// Get the signed-in guest's profile.
///
/// Served from the view cache; a profile update invalidates it.
///
/// # Returns
/// - `200 OK` - The guest's profile
/// - `401 Unauthorized` - Not signed in
#[utoipa::path(
    get,
    path = "/api/account/profile",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Guest profile", body = GuestDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthSession::new(&session).current().await?;
    let guest = AuthGuard::require(principal.as_ref())?;

    let service = &GuestService::new(&state.db, &state.view_cache);
    let view = state
        .view_cache
        .get_or_insert_with(PROFILE_PATH, Some(guest.guest_id), || async move {
            let profile = service.get_profile(Some(guest)).await?;
            Ok(serde_json::to_value(profile.into_dto())?)
        })
        .await?;

    Ok(Json(view))
}

/// Update the signed-in guest's national ID and nationality.
///
/// `nationality` carries the country name and flag code joined by `%`, e.g. `Germany%de`.
///
/// # Returns
/// - `204 No Content` - Profile updated
/// - `400 Bad Request` - National ID is not 6-12 letters or digits
/// - `401 Unauthorized` - Not signed in
/// - `500 Internal Server Error` - "Guest could not be updated"
#[utoipa::path(
    post,
    path = "/api/account/profile",
    tag = ACCOUNT_TAG,
    request_body(content = UpdateGuestForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 204, description = "Profile updated"),
        (status = 400, description = "Invalid national ID", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Guest could not be updated", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateGuestForm>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthSession::new(&session).current().await?;

    let mutation = GuestService::new(&state.db, &state.view_cache)
        .update_guest(principal.as_ref(), &form)
        .await?;

    Ok(navigate(&mutation))
}

/// List the signed-in guest's reservations.
///
/// Rendered on every request, since creating, updating and deleting bookings all change it.
///
/// # Returns
/// - `200 OK` - Reservations with their cabin names
/// - `401 Unauthorized` - Not signed in
#[utoipa::path(
    get,
    path = "/api/account/reservations",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Reservations with cabin names", body = Vec<ReservationDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthSession::new(&session).current().await?;

    let reservations: Vec<ReservationDto> =
        ReservationService::new(&state.db, &state.view_cache)
            .list(principal.as_ref())
            .await?
            .into_iter()
            .map(|reservation| reservation.into_dto())
            .collect();

    Ok(Json(reservations))
}

/// Delete one of the signed-in guest's reservations.
///
/// # Returns
/// - `204 No Content` - Reservation deleted
/// - `400 Bad Request` - `bookingId` is not an id
/// - `401 Unauthorized` - Not signed in
/// - `404 Not Found` - The guest has no booking with that id
/// - `500 Internal Server Error` - "Booking could not be deleted"
#[utoipa::path(
    post,
    path = "/api/account/reservations/delete",
    tag = ACCOUNT_TAG,
    request_body(content = DeleteReservationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 400, description = "Malformed booking id", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Booking could not be deleted", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<DeleteReservationForm>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthSession::new(&session).current().await?;

    let mutation = ReservationService::new(&state.db, &state.view_cache)
        .delete_reservation(principal.as_ref(), &form)
        .await?;

    Ok(navigate(&mutation))
}

/// Get a reservation and its cabin's capacity for the edit form.
///
/// Ownership is checked on every request, so a deleted or foreign booking is never served.
///
/// # Returns
/// - `200 OK` - The booking and its cabin's `maxCapacity`
/// - `400 Bad Request` - `id` is not an id
/// - `401 Unauthorized` - Not signed in
/// - `404 Not Found` - The guest has no booking with that id
#[utoipa::path(
    get,
    path = "/api/account/reservations/edit/{id}",
    tag = ACCOUNT_TAG,
    params(
        ("id" = String, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Reservation to edit", body = EditReservationDto),
        (status = 400, description = "Malformed booking id", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation_for_edit(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthSession::new(&session).current().await?;
    let guest = AuthGuard::require(principal.as_ref())?;
    let booking_id = parse_id("bookingId", &id)?;

    let editable = ReservationService::new(&state.db, &state.view_cache)
        .get_for_edit(Some(guest), booking_id)
        .await?;

    Ok(Json(editable.into_dto()))
}

/// Update the guest count and observations of one of the signed-in guest's reservations.
///
/// Observations beyond 1000 characters are dropped.
///
/// # Returns
/// - `303 See Other` - Updated, redirect to /account/reservations
/// - `400 Bad Request` - Malformed booking id or guest count
/// - `401 Unauthorized` - Not signed in
/// - `404 Not Found` - The guest has no booking with that id
/// - `500 Internal Server Error` - "Reservation could not be updated"
#[utoipa::path(
    post,
    path = "/api/account/reservations/edit",
    tag = ACCOUNT_TAG,
    request_body(content = UpdateReservationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated, redirect to the reservation list"),
        (status = 400, description = "Malformed field", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Reservation could not be updated", body = ErrorDto)
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateReservationForm>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthSession::new(&session).current().await?;

    let mutation = ReservationService::new(&state.db, &state.view_cache)
        .update_reservation(principal.as_ref(), &form)
        .await?;

    Ok(navigate(&mutation))
}
