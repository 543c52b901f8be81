use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_extra::headers::{authorization::Bearer, Authorization};
use axum_extra::TypedHeader;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::auth::decode_claims;
use crate::error::AppError;
use crate::state::AppState;
use stayra_shared::Booking;

#[derive(Debug, Deserialize)]
struct CreateBookingRequest {
    hotel_id: Uuid,
    check_in: NaiveDate,
    check_out: NaiveDate,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/bookings", post(create_booking).get(get_all_bookings))
        .route("/api/bookings/hotel/{hotel_id}", get(get_bookings_for_hotel))
        .route("/api/bookings/{booking_id}", get(get_booking_by_id))
}

async fn create_booking(
    State(state): State<AppState>,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let claims = decode_claims(&state.auth.secret, bearer.token())?;

    let booking = state
        .allocator
        .allocate(req.hotel_id, &claims.sub, req.check_in, req.check_out)
        .await
        .map_err(AppError::from_allocation)?;

    info!(
        booking_id = %booking.id,
        hotel_id = %booking.hotel_id,
        room_number = booking.room_number,
        "booking created"
    );

    Ok((StatusCode::CREATED, Json(booking)))
}

async fn get_all_bookings(
    State(state): State<AppState>,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Vec<Booking>>, AppError> {
    decode_claims(&state.auth.secret, bearer.token())?;

    let bookings = state.store.list_all().await.map_err(AppError::from_store)?;
    Ok(Json(bookings))
}

async fn get_bookings_for_hotel(
    State(state): State<AppState>,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
    Path(hotel_id): Path<Uuid>,
) -> Result<Json<Vec<Booking>>, AppError> {
    decode_claims(&state.auth.secret, bearer.token())?;

    let bookings = state
        .store
        .list_for_hotel(hotel_id)
        .await
        .map_err(AppError::from_store)?;
    Ok(Json(bookings))
}

async fn get_booking_by_id(
    State(state): State<AppState>,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    decode_claims(&state.auth.secret, bearer.token())?;

    let booking = state
        .store
        .get(booking_id)
        .await
        .map_err(AppError::from_store)?
        .ok_or_else(|| AppError::NotFoundError(format!("Booking {} not found", booking_id)))?;
    Ok(Json(booking))
}
