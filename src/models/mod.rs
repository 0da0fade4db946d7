pub mod booking;
pub mod bus;
pub mod route;
pub mod seat;

pub use booking::{Booking, BookingConfirmation, BookingRequest, BookingStatus};
pub use bus::Bus;
pub use route::Route;
pub use seat::{SeatCell, SeatState, SEAT_COLS, SEAT_ROWS, TOTAL_SEATS};

use serde::{de, Deserialize, Deserializer};

/// The booking backend is CSV-backed: counters come back either as JSON numbers
/// or as numeric strings depending on whether the row was rewritten.
pub(crate) fn number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u32),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Str(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

/// Identifiers such as `BookingID` are strings when read back from CSV but plain
/// numbers in a freshly created booking.
pub(crate) fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Str(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Num(n) => n.to_string(),
        Raw::Str(s) => s,
    }))
}
