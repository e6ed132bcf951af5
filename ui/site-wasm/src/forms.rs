//! Client-side submit feedback for contact and newsletter forms.
//!
//! Nothing is sent anywhere: a valid form shows a confirmation on its submit
//! button, then resets after the configured delay.

use crate::dom;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

pub const INVALID_BORDER: &str = "red";
pub const VALID_BORDER: &str = "var(--color-border)";
pub const SENT_LABEL: &str = "Sent Successfully";

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Flag empty required fields. Returns whether the form may be submitted.
pub fn validate(form: &HtmlFormElement) -> bool {
    let mut valid = true;
    for field in dom::query_all_within(form, "input, textarea") {
        if field.has_attribute("required") && is_blank(&field_value(&field)) {
            valid = false;
            dom::set_style(&field, "border-color", INVALID_BORDER);
        } else {
            dom::set_style(&field, "border-color", VALID_BORDER);
        }
    }
    valid
}

pub fn on_submit(form: &HtmlFormElement, event: &web_sys::Event, reset_delay_ms: u32) {
    event.prevent_default();
    if !validate(form) {
        return;
    }

    let Some(button) = dom::query_within(form, "button[type=\"submit\"]")
        .and_then(|b| b.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let original = button.inner_text();
    button.set_inner_text(SENT_LABEL);
    let _ = button.style().set_property("background-color", "green");
    let _ = button.style().set_property("color", "white");

    let form = form.clone();
    Timeout::new(reset_delay_ms, move || {
        form.reset();
        button.set_inner_text(&original);
        let _ = button
            .style()
            .set_property("background-color", "var(--color-accent)");
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   \t\n"));
        assert!(!is_blank(" a "));
    }
}
