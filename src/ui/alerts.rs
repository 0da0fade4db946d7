use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

use super::registry::{Element, ElementRegistry};
use super::timer::TimerHandle;

static NEXT_ALERT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlertKind::Info => "info",
            AlertKind::Success => "success",
            AlertKind::Warning => "warning",
            AlertKind::Danger => "danger",
        })
    }
}

/// Inserts an alert at the top of `container` (or body) and returns its id.
pub fn show_alert(
    registry: &mut impl ElementRegistry,
    message: &str,
    kind: AlertKind,
    container: Option<&str>,
) -> String {
    let id = format!("alert-{}", NEXT_ALERT_ID.fetch_add(1, Ordering::Relaxed));
    let alert = Element::new("div")
        .with_id(id.clone())
        .with_class(&format!("alert alert-{}", kind))
        .with_html(message);
    registry.insert_first(container, alert);
    id
}

/// Removes the alert after `delay`. Dropping the handle keeps the alert on screen.
pub fn schedule_dismiss<R>(registry: Arc<Mutex<R>>, alert_id: String, delay: Duration) -> TimerHandle
where
    R: ElementRegistry + Send + 'static,
{
    TimerHandle::start(delay, move || match registry.lock() {
        Ok(mut registry) => {
            registry.remove(&alert_id);
        }
        Err(_) => warn!("registry lock poisoned, alert {} left in place", alert_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::registry::Document;

    #[test]
    fn alert_goes_to_top_of_container() {
        let mut doc = Document::new();
        doc.append(Element::new("form").with_id("bookingForm"));
        doc.append(Element::new("input").with_id("name").with_parent("bookingForm"));

        let id = show_alert(&mut doc, "Seat Booked Successfully!", AlertKind::Success, Some("bookingForm"));
        let children: Vec<_> = doc
            .iter()
            .filter(|e| e.parent() == Some("bookingForm"))
            .filter_map(Element::id)
            .collect();
        assert_eq!(children, [id.as_str(), "name"]);
        assert!(doc.by_id(&id).unwrap().has_class("alert-success"));
    }

    #[tokio::test(start_paused = true)]
    async fn alert_disappears_after_delay() {
        let doc = Arc::new(Mutex::new(Document::new()));
        let id = show_alert(&mut *doc.lock().unwrap(), "oops", AlertKind::Danger, None);

        let _timer = schedule_dismiss(doc.clone(), id.clone(), Duration::from_secs(5));
        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(doc.lock().unwrap().by_id(&id).is_some());

        tokio::time::sleep(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        assert!(doc.lock().unwrap().by_id(&id).is_none());
    }
}
