use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use validator::ValidationError;

use crate::ui::{Element, ElementRegistry};

pub const INVALID_EMAIL: &str = "Please enter a valid email address";

/// Required form field and the message shown when it is blank.
#[derive(Debug, Clone)]
pub struct RequiredField {
    pub id: String,
    pub message: Option<String>,
}

impl RequiredField {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX to compile");
}

/// `local@domain.tld` without whitespace; the domain needs an inner dot.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Hook for `#[validate(custom(...))]`.
pub fn email_shape(email: &str) -> Result<(), ValidationError> {
    if validate_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message(Cow::Borrowed(INVALID_EMAIL)))
    }
}

/// One message per missing or blank field, in field order.
pub fn validate_required(registry: &impl ElementRegistry, fields: &[RequiredField]) -> Vec<String> {
    fields
        .iter()
        .filter(|f| {
            registry
                .by_id(&f.id)
                .map_or(true, |el| el.value.trim().is_empty())
        })
        .map(|f| {
            f.message
                .clone()
                .unwrap_or_else(|| format!("{} is required", f.id))
        })
        .collect()
}

pub fn validate_email_field(registry: &impl ElementRegistry, field_id: &str) -> Option<&'static str> {
    let field = registry.by_id(field_id)?;
    (!validate_email(&field.value)).then_some(INVALID_EMAIL)
}

/// Resets the form and every field that belongs to it.
pub fn clear_form(registry: &mut impl ElementRegistry, form_id: &str) -> bool {
    let Some(form) = registry.by_id_mut(form_id) else {
        return false;
    };
    form.value.clear();
    for field in registry.select_mut(&|e: &Element| e.parent() == Some(form_id)) {
        field.value.clear();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Document;

    fn form() -> Document {
        let mut doc = Document::new();
        doc.append(Element::new("form").with_id("bookingForm"));
        doc.append(Element::new("input").with_id("name").with_parent("bookingForm").with_value("  "));
        doc.append(
            Element::new("input")
                .with_id("email")
                .with_parent("bookingForm")
                .with_value("asha@uni.edu"),
        );
        doc.append(Element::new("input").with_id("search").with_value("BUS1"));
        doc
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "first.last@uni.ac.in", "x+tag@mail.example"] {
            assert!(validate_email(ok), "{ok}");
        }
        for bad in ["", "plain", "@b.co", "a@b", "a@.co", "a@b.", "a b@c.de", "a@b@c.de", "a@b.co\n"] {
            assert!(!validate_email(bad), "{bad}");
        }
    }

    #[test]
    fn email_shape_carries_form_message() {
        assert!(email_shape("asha@uni.edu").is_ok());
        let err = email_shape("asha@uni").unwrap_err();
        assert_eq!(err.message.as_deref(), Some(INVALID_EMAIL));
    }

    #[test]
    fn required_fields_report_in_order() {
        let doc = form();
        let errors = validate_required(
            &doc,
            &[
                RequiredField::new("name").with_message("Please enter your name"),
                RequiredField::new("email"),
                RequiredField::new("studentId"),
            ],
        );
        assert_eq!(errors, ["Please enter your name", "studentId is required"]);
    }

    #[test]
    fn email_field_check() {
        let mut doc = form();
        assert_eq!(validate_email_field(&doc, "email"), None);
        assert_eq!(validate_email_field(&doc, "missing"), None);
        doc.by_id_mut("email").unwrap().value = "asha@uni".into();
        assert_eq!(validate_email_field(&doc, "email"), Some(INVALID_EMAIL));
    }

    #[test]
    fn clear_form_only_touches_its_fields() {
        let mut doc = form();
        assert!(clear_form(&mut doc, "bookingForm"));
        assert_eq!(doc.by_id("email").unwrap().value, "");
        assert_eq!(doc.by_id("search").unwrap().value, "BUS1");
        assert!(!clear_form(&mut doc, "nope"));
    }
}
