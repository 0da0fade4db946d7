use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use super::upstream_error;
use crate::{
    models::SeatCell,
    services::seat_layout::{booked_seats_for_bus, render_seat_cells, render_seat_grid},
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/fragments/buses/{bus}/seats", get(seat_grid_fragment))
        .route("/api/buses/{bus}/seats", get(seat_grid_json))
}

// GET /fragments/buses/{bus}/seats
async fn seat_grid_fragment(
    State(state): State<Arc<AppState>>,
    Path(bus): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let bookings = state.api.get_bookings().await.map_err(upstream_error)?;
    let booked = booked_seats_for_bus(&bookings, &bus);
    tracing::debug!("bus {}: {} booked seat(s)", bus, booked.len());

    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        render_seat_grid(&bus, &booked),
    ))
}

#[derive(Debug, Serialize)]
struct SeatGridResponse {
    bus: String,
    booked: Vec<String>,
    seats: Vec<SeatCell>,
}

// GET /api/buses/{bus}/seats
async fn seat_grid_json(
    State(state): State<Arc<AppState>>,
    Path(bus): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let bookings = state.api.get_bookings().await.map_err(upstream_error)?;
    let booked = booked_seats_for_bus(&bookings, &bus);
    let seats = render_seat_cells(&bus, &booked);

    Ok(Json(SeatGridResponse { bus, booked, seats }))
}
