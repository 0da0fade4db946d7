//! seat_layout.rs
//!
//! Сборка схемы мест автобуса из списка бронирований.
//!
//! Три шага, все без состояния:
//! 1.  [`booked_seats_for_bus`] выбирает подтверждённые места нужного автобуса;
//! 2.  [`render_seat_cells`] / [`render_seat_grid`] строят все 40 мест
//!     (ряды A-J, колонки 1-4) с пометкой available/booked;
//! 3.  [`update_seat_status`] перекрашивает уже отрисованные места через
//!     [`ElementRegistry`], ничего не создавая и не удаляя.

use std::collections::HashSet;
use std::fmt::Write;
use tracing::debug;

use crate::{
    models::{Booking, SeatCell, SeatState, SEAT_COLS, SEAT_ROWS, TOTAL_SEATS},
    ui::{Element, ElementRegistry},
};

pub const DATA_SEAT: &str = "seat";
pub const DATA_BUS: &str = "bus";

/// Seat ids in row-major order: A1, A2, A3, A4, B1, ... J4.
pub fn seat_ids() -> impl Iterator<Item = String> {
    SEAT_ROWS
        .into_iter()
        .flat_map(|row| SEAT_COLS.into_iter().map(move |col| format!("{}{}", row, col)))
}

/// Confirmed seats of `bus_number` in booking order. Duplicates are kept.
pub fn booked_seats_for_bus(bookings: &[Booking], bus_number: &str) -> Vec<String> {
    bookings
        .iter()
        .filter(|b| b.bus_number == bus_number && b.status.is_confirmed())
        .map(|b| b.seat_number.clone())
        .collect()
}

fn booked_set<S: AsRef<str>>(booked: &[S]) -> HashSet<&str> {
    booked.iter().map(|s| s.as_ref()).collect()
}

pub fn render_seat_cells<S: AsRef<str>>(bus_number: &str, booked: &[S]) -> Vec<SeatCell> {
    let booked = booked_set(booked);
    let mut cells = Vec::with_capacity(TOTAL_SEATS);
    for seat in seat_ids() {
        let state = SeatState::from_booked(booked.contains(seat.as_str()));
        cells.push(SeatCell {
            seat,
            bus: bus_number.to_string(),
            state,
        });
    }
    cells
}

pub fn render_seat_grid<S: AsRef<str>>(bus_number: &str, booked: &[S]) -> String {
    let cells = render_seat_cells(bus_number, booked);
    let mut html = String::with_capacity(cells.len() * 80);
    for cell in &cells {
        // write! в String не падает
        let _ = write!(
            html,
            r#"<div class="{}" data-seat="{}" data-bus="{}">{}</div>"#,
            cell.state.class_name(),
            escape_html(&cell.seat),
            escape_html(&cell.bus),
            escape_html(&cell.seat),
        );
    }
    html
}

/// Re-applies seat state to every rendered seat of `bus_number`.
/// Returns how many seats actually changed.
pub fn update_seat_status<S: AsRef<str>>(
    registry: &mut impl ElementRegistry,
    bus_number: &str,
    booked: &[S],
) -> usize {
    let booked = booked_set(booked);
    let mut changed = 0;
    for el in registry.by_data_mut(DATA_BUS, bus_number) {
        let is_booked = el.data(DATA_SEAT).is_some_and(|s| booked.contains(s));
        let class_name = SeatState::from_booked(is_booked).class_name();
        if el.class_name() != class_name {
            el.set_class_name(class_name);
            changed += 1;
        }
    }
    debug!("bus {}: {} seat(s) changed state", bus_number, changed);
    changed
}

impl From<&SeatCell> for Element {
    fn from(cell: &SeatCell) -> Self {
        Element::new("div")
            .with_class(cell.state.class_name())
            .with_data(DATA_SEAT, cell.seat.clone())
            .with_data(DATA_BUS, cell.bus.clone())
            .with_html(cell.seat.clone())
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
