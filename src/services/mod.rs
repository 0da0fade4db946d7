pub mod seat_layout;
pub mod statistics;
pub mod validation;
