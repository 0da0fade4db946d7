use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::optional_id;

pub const CONFIRMED: &str = "Confirmed";

/// Статус бронирования. Только `Confirmed` занимает место.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Confirmed,
    Other(String),
}

impl BookingStatus {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, BookingStatus::Confirmed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Confirmed => CONFIRMED,
            BookingStatus::Other(s) => s,
        }
    }
}

impl From<String> for BookingStatus {
    fn from(s: String) -> Self {
        if s == CONFIRMED {
            BookingStatus::Confirmed
        } else {
            BookingStatus::Other(s)
        }
    }
}

impl From<&str> for BookingStatus {
    fn from(s: &str) -> Self {
        BookingStatus::from(s.to_string())
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Confirmed => CONFIRMED.to_string(),
            BookingStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booking row as served by `/api/bookings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Booking {
    pub bus_number: String,
    pub seat_number: String,
    pub status: BookingStatus,
    #[serde(rename = "BookingID", default, deserialize_with = "optional_id")]
    pub booking_id: Option<String>,
    #[serde(rename = "StudentID", default, deserialize_with = "optional_id")]
    pub student_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub time_slot: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub booking_date: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub special_needs: Option<String>,
}

impl Booking {
    /// Minimal booking with only the fields seat reconciliation looks at.
    pub fn new(
        bus_number: impl Into<String>,
        seat_number: impl Into<String>,
        status: impl Into<BookingStatus>,
    ) -> Self {
        Self {
            bus_number: bus_number.into(),
            seat_number: seat_number.into(),
            status: status.into(),
            booking_id: None,
            student_id: None,
            name: None,
            email: None,
            time_slot: None,
            destination: None,
            booking_date: None,
            priority: None,
            special_needs: None,
        }
    }
}

// POST /api/book
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Student ID is required"))]
    pub student_id: String,
    #[validate(custom(function = "crate::services::validation::email_shape"))]
    pub email: String,
    #[validate(length(min = 1, message = "Time slot is required"))]
    pub time_slot: String,
    #[validate(length(min = 1, message = "Destination is required"))]
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_needs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub success: bool,
    pub message: String,
    pub booking: Booking,
}
