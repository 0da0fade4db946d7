use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use std::sync::Arc;

use super::upstream_error;
use crate::{services::statistics::calculate_stats, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/stats", get(get_stats))
}

// GET /api/stats
async fn get_stats(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, (StatusCode, String)> {
    // бронирования и автобусы тянем параллельно
    let (bookings, buses) = futures::try_join!(state.api.get_bookings(), state.api.get_buses())
        .map_err(upstream_error)?;

    Ok(Json(calculate_stats(&bookings, &buses)))
}
