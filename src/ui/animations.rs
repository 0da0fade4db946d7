use serde::Serialize;

use super::registry::{Element, ElementRegistry};
use crate::config::UiConfig;

pub const OBSERVED_CLASSES: [&str; 3] = ["fade-in", "slide-in-left", "slide-in-right"];
pub const VISIBLE_CLASS: &str = "visible";

/// Options handed to the AOS script on page load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AosSettings {
    pub duration: u64,
    pub once: bool,
    pub offset: u32,
}

impl From<&UiConfig> for AosSettings {
    fn from(ui: &UiConfig) -> Self {
        Self {
            duration: ui.aos_duration_ms,
            once: ui.aos_once,
            offset: ui.aos_offset,
        }
    }
}

/// Adds `visible` to animated elements once enough of them enters the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollReveal {
    pub threshold: f64,
    /// Negative shrinks the bottom edge of the viewport.
    pub root_margin_bottom: f64,
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_bottom: -50.0,
        }
    }
}

impl From<&UiConfig> for ScrollReveal {
    fn from(ui: &UiConfig) -> Self {
        Self {
            threshold: ui.reveal_threshold,
            root_margin_bottom: ui.reveal_root_margin_bottom,
        }
    }
}

impl ScrollReveal {
    /// Share of the element inside the (margin-adjusted) viewport, `None` when
    /// it does not intersect at all.
    pub fn intersection_ratio(&self, viewport_height: f64, top: f64, height: f64) -> Option<f64> {
        let root_bottom = viewport_height + self.root_margin_bottom;
        let bottom = top + height;
        let overlap = bottom.min(root_bottom) - top.max(0.0);
        if overlap < 0.0 || (overlap == 0.0 && height > 0.0) {
            return None;
        }
        if height <= 0.0 {
            return Some(1.0);
        }
        Some(overlap / height)
    }

    fn is_observed(element: &Element) -> bool {
        OBSERVED_CLASSES.iter().any(|c| element.has_class(c))
    }

    /// First pass when observation starts: any intersecting element is revealed,
    /// whatever its ratio. Returns how many elements became visible.
    pub fn observe(&self, registry: &mut impl ElementRegistry, viewport_height: f64) -> usize {
        self.reveal_where(registry, viewport_height, |_| true)
    }

    /// Pass after a scroll: an element is revealed once its ratio reaches
    /// `threshold`. Returns how many elements became visible.
    pub fn reveal(&self, registry: &mut impl ElementRegistry, viewport_height: f64) -> usize {
        self.reveal_where(registry, viewport_height, |r| r >= self.threshold)
    }

    fn reveal_where(
        &self,
        registry: &mut impl ElementRegistry,
        viewport_height: f64,
        accept: impl Fn(f64) -> bool,
    ) -> usize {
        let mut revealed = 0;
        for el in registry.select_mut(&|e: &Element| Self::is_observed(e) && !e.has_class(VISIBLE_CLASS)) {
            let Some(bounds) = el.bounds else { continue };
            let ratio = self.intersection_ratio(viewport_height, bounds.top, bounds.height);
            if ratio.is_some_and(&accept) {
                el.add_class(VISIBLE_CLASS);
                revealed += 1;
            }
        }
        revealed
    }
}
