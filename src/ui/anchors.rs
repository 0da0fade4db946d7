use super::registry::ElementRegistry;

/// Id referenced by an in-page link (`#section`), if `href` is one.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smooth-scroll handler for `a[href^="#"]` links: the vertical offset that
/// aligns the target's top with the viewport top. `None` when the link is not
/// in-page or the target is missing, in which case nothing scrolls.
pub fn scroll_offset_for(registry: &impl ElementRegistry, href: &str) -> Option<f64> {
    let id = anchor_target(href)?;
    let target = registry.by_id(id)?;
    Some(target.bounds.map_or(0.0, |b| b.top))
}
