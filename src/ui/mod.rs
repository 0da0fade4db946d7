//! Page helpers: element registry, modals, alerts, loading states, timers,
//! in-page anchor scrolling and scroll animations.

pub mod alerts;
pub mod anchors;
pub mod animations;
pub mod format;
pub mod loading;
pub mod modal;
pub mod registry;
pub mod timer;

pub use registry::{Document, Element, ElementRegistry};
pub use timer::{Debouncer, TimerHandle};
