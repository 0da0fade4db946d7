use serde::Serialize;
use std::fmt;

pub const SEAT_ROWS: [char; 10] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];
pub const SEAT_COLS: [u8; 4] = [1, 2, 3, 4];
pub const TOTAL_SEATS: usize = SEAT_ROWS.len() * SEAT_COLS.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatState {
    Available,
    Booked,
}

impl SeatState {
    pub fn from_booked(booked: bool) -> Self {
        if booked {
            SeatState::Booked
        } else {
            SeatState::Available
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeatState::Available => "available",
            SeatState::Booked => "booked",
        }
    }

    /// Full class attribute of a seat element in this state.
    pub fn class_name(self) -> &'static str {
        match self {
            SeatState::Available => "seat available",
            SeatState::Booked => "seat booked",
        }
    }
}

impl fmt::Display for SeatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered seat of a bus layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatCell {
    pub seat: String,
    pub bus: String,
    pub state: SeatState,
}
