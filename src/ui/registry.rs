//! In-memory element tree behind the [`ElementRegistry`] capability.
//!
//! Helpers never reach for a page-wide document: they receive a registry and only
//! touch what it hands back.

use std::collections::BTreeMap;

/// Vertical placement of an element relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    id: Option<String>,
    /// Id of the owning element; `None` means the element sits directly in body.
    parent: Option<String>,
    classes: Vec<String>,
    data: BTreeMap<String, String>,
    pub display: Option<String>,
    pub overflow: Option<String>,
    pub inner_html: String,
    pub value: String,
    pub disabled: bool,
    pub bounds: Option<Bounds>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.inner_html = html.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_bounds(mut self, top: f64, height: f64) -> Self {
        self.bounds = Some(Bounds { top, height });
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        for c in class.split_whitespace() {
            if !self.has_class(c) {
                self.classes.push(c.to_string());
            }
        }
    }

    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Replaces the whole class list, like assigning `className`.
    pub fn set_class_name(&mut self, class_name: &str) {
        self.classes = class_name.split_whitespace().map(str::to_string).collect();
    }

    pub fn is_displayed_block(&self) -> bool {
        self.display.as_deref() == Some("block")
    }
}

/// Capability to look up and mutate rendered elements.
///
/// Implementors provide selection and structural edits; lookups by id, class and
/// data attribute are derived from [`ElementRegistry::select_mut`].
pub trait ElementRegistry {
    fn select(&self, pred: &dyn Fn(&Element) -> bool) -> Vec<&Element>;

    fn select_mut(&mut self, pred: &dyn Fn(&Element) -> bool) -> Vec<&mut Element>;

    fn body(&self) -> &Element;

    fn body_mut(&mut self) -> &mut Element;

    /// Inserts `element` as the first child of `parent` (body when `None`).
    fn insert_first(&mut self, parent: Option<&str>, element: Element);

    fn remove(&mut self, id: &str) -> Option<Element>;

    fn by_id(&self, id: &str) -> Option<&Element> {
        self.select(&|e: &Element| e.id() == Some(id)).into_iter().next()
    }

    fn by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.select_mut(&|e: &Element| e.id() == Some(id)).into_iter().next()
    }

    fn by_class_mut(&mut self, class: &str) -> Vec<&mut Element> {
        self.select_mut(&|e: &Element| e.has_class(class))
    }

    fn by_data_mut(&mut self, key: &str, value: &str) -> Vec<&mut Element> {
        self.select_mut(&|e: &Element| e.data(key) == Some(value))
    }

    fn children_mut(&mut self, parent: &str) -> Vec<&mut Element> {
        self.select_mut(&|e: &Element| e.parent() == Some(parent))
    }
}

/// Flat, document-ordered element store.
#[derive(Debug, Clone)]
pub struct Document {
    body: Element,
    elements: Vec<Element>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            body: Element::new("body"),
            elements: Vec::new(),
        }
    }

    pub fn append(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.elements.extend(elements);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }
}

impl ElementRegistry for Document {
    fn select(&self, pred: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        self.elements.iter().filter(|e| pred(e)).collect()
    }

    fn select_mut(&mut self, pred: &dyn Fn(&Element) -> bool) -> Vec<&mut Element> {
        self.elements.iter_mut().filter(|e| pred(e)).collect()
    }

    fn body(&self) -> &Element {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    fn insert_first(&mut self, parent: Option<&str>, mut element: Element) {
        element.parent = parent.map(str::to_string);
        let pos = self
            .elements
            .iter()
            .position(|e| e.parent() == parent)
            .or_else(|| {
                // пустой контейнер - сразу за ним
                let id = parent?;
                self.elements.iter().position(|e| e.id() == Some(id)).map(|p| p + 1)
            })
            .unwrap_or(self.elements.len());
        self.elements.insert(pos, element);
    }

    fn remove(&mut self, id: &str) -> Option<Element> {
        let pos = self.elements.iter().position(|e| e.id() == Some(id))?;
        Some(self.elements.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_behaves_like_dom() {
        let mut el = Element::new("div").with_class("seat available");
        assert!(el.has_class("seat"));
        el.add_class("seat visible");
        assert_eq!(el.class_name(), "seat available visible");
        el.set_class_name("seat  booked");
        assert_eq!(el.class_name(), "seat booked");
        assert!(!el.has_class("available"));
    }

    #[test]
    fn insert_first_goes_before_siblings() {
        let mut doc = Document::new();
        doc.append(Element::new("div").with_id("panel"));
        doc.append(Element::new("p").with_id("p1").with_parent("panel"));
        doc.insert_first(Some("panel"), Element::new("div").with_id("note"));
        doc.insert_first(None, Element::new("div").with_id("top"));

        let ids: Vec<_> = doc.iter().filter_map(Element::id).collect();
        assert_eq!(ids, ["top", "panel", "note", "p1"]);
        assert_eq!(doc.by_id("note").unwrap().parent(), Some("panel"));
    }

    #[test]
    fn remove_by_id() {
        let mut doc = Document::new();
        doc.append(Element::new("div").with_id("a"));
        assert!(doc.remove("a").is_some());
        assert!(doc.remove("a").is_none());
        assert!(doc.is_empty());
    }
}
