use tracing::debug;

use super::registry::{Element, ElementRegistry};

pub fn show(registry: &mut impl ElementRegistry, modal_id: &str) -> bool {
    let Some(modal) = registry.by_id_mut(modal_id) else {
        return false;
    };
    modal.display = Some("block".to_string());
    registry.body_mut().overflow = Some("hidden".to_string());
    debug!("modal {} shown", modal_id);
    true
}

pub fn hide(registry: &mut impl ElementRegistry, modal_id: &str) -> bool {
    let Some(modal) = registry.by_id_mut(modal_id) else {
        return false;
    };
    modal.display = Some("none".to_string());
    registry.body_mut().overflow = Some("auto".to_string());
    debug!("modal {} hidden", modal_id);
    true
}

/// Escape closes the first visible modal. Returns its id.
pub fn close_on_escape(registry: &mut impl ElementRegistry) -> Option<String> {
    let id = registry
        .select(&|e: &Element| e.has_class("modal") && e.is_displayed_block())
        .into_iter()
        .find_map(|e| e.id().map(str::to_string))?;
    hide(registry, &id);
    Some(id)
}

/// A click that lands on the modal backdrop itself closes it.
pub fn close_on_backdrop_click(registry: &mut impl ElementRegistry, target_id: &str) -> bool {
    let is_modal = registry
        .by_id(target_id)
        .is_some_and(|e| e.has_class("modal"));
    is_modal && hide(registry, target_id)
}

/// Close button (`.close`) inside a modal hides the owning modal.
pub fn close_from_button(registry: &mut impl ElementRegistry, button_id: &str) -> bool {
    let owner = registry
        .by_id(button_id)
        .filter(|e| e.has_class("close"))
        .and_then(|e| e.parent().map(str::to_string));
    match owner {
        Some(modal_id) => close_on_backdrop_click(registry, &modal_id),
        None => false,
    }
}
