//! statistics.rs
//!
//! Сводная статистика для дашборда: бронирования, автобусы, занятость мест.

use serde::Serialize;

use crate::{
    models::{Booking, Bus},
    ui::ElementRegistry,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub total_bookings: usize,
    pub total_buses: usize,
    pub total_seats: u64,
    pub booked_seats: u64,
    pub available_seats: u64,
    /// Percent, one decimal place.
    pub occupancy_rate: f64,
}

/// Dashboard counters. Seat totals come from the bus records, not from
/// counting bookings.
pub fn calculate_stats(bookings: &[Booking], buses: &[Bus]) -> BookingStats {
    // u32 per bus, summed as u64
    let total_seats: u64 = buses.iter().map(|b| u64::from(b.total_seats)).sum();
    let booked_seats: u64 = buses.iter().map(|b| u64::from(b.booked_seats)).sum();

    let occupancy_rate = if total_seats > 0 {
        (booked_seats as f64 / total_seats as f64 * 1000.0).round() / 10.0
    } else {
        0.0
    };

    BookingStats {
        total_bookings: bookings.len(),
        total_buses: buses.len(),
        total_seats,
        booked_seats,
        available_seats: total_seats.saturating_sub(booked_seats),
        occupancy_rate,
    }
}

/// Writes counters into `#totalBookings`, `#totalBuses`, `#totalSeats` and
/// `#availableSeats`; missing elements are skipped.
pub fn apply_stats(registry: &mut impl ElementRegistry, stats: &BookingStats) {
    let fields = [
        ("totalBookings", stats.total_bookings.to_string()),
        ("totalBuses", stats.total_buses.to_string()),
        ("totalSeats", stats.total_seats.to_string()),
        ("availableSeats", stats.available_seats.to_string()),
    ];
    for (id, text) in fields {
        if let Some(el) = registry.by_id_mut(id) {
            el.inner_html = text;
        }
    }
}
