use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

use super::upstream_error;
use crate::{api_client::StudentLookup, models::BookingRequest, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/book", post(book_seat))
        .route("/api/routes", get(get_routes))
        .route("/api/student-bookings", get(get_student_bookings))
}

/// Flattens validator output into one line per failed field, sorted by field.
fn validation_messages(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// POST /api/book
async fn book_seat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookingRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if let Err(errors) = req.validate() {
        return Err((StatusCode::BAD_REQUEST, validation_messages(&errors)));
    }

    let confirmation = state.api.book_seat(&req).await.map_err(upstream_error)?;
    tracing::info!(
        "seat {} on {} booked for student {}",
        confirmation.booking.seat_number,
        confirmation.booking.bus_number,
        req.student_id
    );
    Ok(Json(confirmation))
}

// GET /api/routes
async fn get_routes(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, (StatusCode, String)> {
    let routes = state.api.get_routes().await.map_err(upstream_error)?;
    Ok(Json(routes))
}

#[derive(Debug, serde::Deserialize)]
struct StudentQuery {
    email: Option<String>,
    #[serde(rename = "studentId")]
    student_id: Option<String>,
}

// GET /api/student-bookings?email=..|studentId=..
async fn get_student_bookings(
    State(state): State<Arc<AppState>>,
    Query(q): Query<StudentQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let lookup = StudentLookup {
        email: q.email.filter(|s| !s.is_empty()),
        student_id: q.student_id.filter(|s| !s.is_empty()),
    };
    let bookings = state
        .api
        .get_student_bookings(&lookup)
        .await
        .map_err(upstream_error)?;
    Ok(Json(bookings))
}
