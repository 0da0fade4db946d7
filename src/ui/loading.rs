use super::registry::{Element, ElementRegistry};

pub const SPINNER_HTML: &str = r#"<div class="spinner"></div>"#;

pub fn show_loading(element: &mut Element) {
    element.inner_html = SPINNER_HTML.to_string();
}

pub fn hide_loading(element: &mut Element, content: Option<&str>) {
    element.inner_html = content.unwrap_or_default().to_string();
}

/// Button put into a busy state; [`ButtonLoading::restore`] puts it back.
#[derive(Debug)]
#[must_use = "the button stays disabled until restored"]
pub struct ButtonLoading {
    button_id: String,
    original_html: String,
}

impl ButtonLoading {
    pub fn start(registry: &mut impl ElementRegistry, button_id: &str, text: &str) -> Option<Self> {
        let button = registry.by_id_mut(button_id)?;
        let original_html = std::mem::replace(
            &mut button.inner_html,
            format!(r#"<i class="fas fa-spinner fa-spin"></i> {}"#, text),
        );
        button.disabled = true;
        Some(Self {
            button_id: button_id.to_string(),
            original_html,
        })
    }

    pub fn restore(self, registry: &mut impl ElementRegistry) {
        if let Some(button) = registry.by_id_mut(&self.button_id) {
            button.disabled = false;
            button.inner_html = self.original_html;
        }
    }
}
