use std::collections::HashSet;

use bus_seat_client::{
    models::{Booking, SeatState, TOTAL_SEATS},
    services::seat_layout::{booked_seats_for_bus, render_seat_cells, seat_ids, update_seat_status},
    ui::{Document, Element},
};
use proptest::prelude::*;

fn seat_id() -> impl Strategy<Value = String> {
    // mostly valid ids, sometimes junk
    prop_oneof![
        4 => (0usize..10, 1u8..=4).prop_map(|(r, c)| format!("{}{}", (b'A' + r as u8) as char, c)),
        1 => "[A-Z]?[0-9]{0,2}",
    ]
}

fn booking() -> impl Strategy<Value = Booking> {
    (
        prop_oneof![Just("BUS1"), Just("BUS2"), Just("BUS3")],
        seat_id(),
        prop_oneof![Just("Confirmed"), Just("Cancelled"), Just("Pending")],
    )
        .prop_map(|(bus, seat, status)| Booking::new(bus, seat, status))
}

proptest! {
    #[test]
    fn extractor_is_an_ordered_filter(bookings in prop::collection::vec(booking(), 0..60)) {
        let expected: Vec<String> = bookings
            .iter()
            .filter(|b| b.bus_number == "BUS1" && b.status.as_str() == "Confirmed")
            .map(|b| b.seat_number.clone())
            .collect();
        prop_assert_eq!(booked_seats_for_bus(&bookings, "BUS1"), expected);
    }

    #[test]
    fn renderer_covers_each_seat_once(booked in prop::collection::vec(seat_id(), 0..50)) {
        let cells = render_seat_cells("BUS1", &booked);
        prop_assert_eq!(cells.len(), TOTAL_SEATS);

        let unique: HashSet<_> = cells.iter().map(|c| c.seat.as_str()).collect();
        prop_assert_eq!(unique.len(), TOTAL_SEATS);

        let order: Vec<_> = cells.iter().map(|c| c.seat.clone()).collect();
        prop_assert_eq!(order, seat_ids().collect::<Vec<_>>());

        for cell in &cells {
            let expected = SeatState::from_booked(booked.contains(&cell.seat));
            prop_assert_eq!(cell.state, expected);
            prop_assert_eq!(cell.bus.as_str(), "BUS1");
        }
    }

    #[test]
    fn update_matches_fresh_render(
        first in prop::collection::vec(seat_id(), 0..40),
        second in prop::collection::vec(seat_id(), 0..40),
    ) {
        let mut doc = Document::new();
        doc.extend(render_seat_cells("BUS1", &first).iter().map(Element::from));

        update_seat_status(&mut doc, "BUS1", &second);
        let fresh: Vec<String> = render_seat_cells("BUS1", &second)
            .iter()
            .map(|c| c.state.class_name().to_string())
            .collect();
        let updated: Vec<String> = doc.iter().map(Element::class_name).collect();
        prop_assert_eq!(&updated, &fresh);

        // второй раз ничего не меняет
        prop_assert_eq!(update_seat_status(&mut doc, "BUS1", &second), 0);
        let again: Vec<String> = doc.iter().map(Element::class_name).collect();
        prop_assert_eq!(again, updated);
    }
}

#[test]
fn empty_and_full_boundaries() {
    let none = render_seat_cells("BUS1", &[] as &[String]);
    assert!(none.iter().all(|c| c.state == SeatState::Available));

    let all: Vec<String> = seat_ids().collect();
    let full = render_seat_cells("BUS1", &all);
    assert!(full.iter().all(|c| c.state == SeatState::Booked));
}
