pub mod bookings;
pub mod seats;
pub mod stats;

use axum::{http::StatusCode, Router};
use std::sync::Arc;

use crate::error::ApiError;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(seats::routes())
        .merge(stats::routes())
        .merge(bookings::routes())
}

/* ---------- helpers ---------- */

/// Backend status errors pass through; anything else is a bad gateway.
pub(crate) fn upstream_error(e: ApiError) -> (StatusCode, String) {
    match e {
        ApiError::Status { status, message } => (status, message),
        ApiError::InvalidRequest(message) => (StatusCode::BAD_REQUEST, message),
        other => (StatusCode::BAD_GATEWAY, other.to_string()),
    }
}
