//! Event binding.
//!
//! Wires every page listener once at startup. Listeners live for the whole
//! page, so their closures are leaked with `forget()`.

use crate::dom::Elements;
use crate::forms;
use crate::shop;
use crate::state;
use crate::theme;
use crate::wishlist;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Helper: attach a handler for `$event` to an element.
macro_rules! on_event {
    ($el:expr, $event:expr, $ty:ty, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut($ty)>);
        $el.add_event_listener_with_callback($event, cb.as_ref().unchecked_ref())?;
        cb.forget();
    }};
}

/// Bind all page event listeners. Call once after init.
pub fn bind_events(els: &Elements) -> Result<(), JsValue> {
    // ── Wishlist controls (delegated) ──
    on_event!(els.body, "click", web_sys::MouseEvent, move |e: web_sys::MouseEvent| {
        wishlist::on_body_click(&e);
    });

    // ── Theme ──
    if let Some(btn) = &els.theme_toggle {
        let els2 = els.clone();
        on_event!(btn, "click", web_sys::MouseEvent, move |_: web_sys::MouseEvent| {
            theme::toggle(&els2);
        });
    }

    // ── Forms ──
    let reset_delay_ms = state::config().form_reset_delay_ms;
    for form in &els.forms {
        let form2 = form.clone();
        on_event!(form, "submit", web_sys::Event, move |e: web_sys::Event| {
            forms::on_submit(&form2, &e, reset_delay_ms);
        });
    }

    // ── Shop ──
    if let Some(cards) = shop::capture(els) {
        for cb in &els.gender_checkboxes {
            let els2 = els.clone();
            let cards2 = cards.clone();
            on_event!(cb, "change", web_sys::Event, move |_: web_sys::Event| {
                if let Err(err) = shop::filter_and_sort(&els2, &cards2) {
                    gloo_console::error!("shop update failed", err);
                }
            });
        }
        if let Some(select) = &els.sort_select {
            let els2 = els.clone();
            let cards2 = cards.clone();
            on_event!(select, "change", web_sys::Event, move |_: web_sys::Event| {
                if let Err(err) = shop::filter_and_sort(&els2, &cards2) {
                    gloo_console::error!("shop update failed", err);
                }
            });
        }
    }
    if let Some(btn) = &els.filter_toggle {
        let els2 = els.clone();
        on_event!(btn, "click", web_sys::MouseEvent, move |_: web_sys::MouseEvent| {
            shop::toggle_filters(&els2);
        });
    }

    Ok(())
}
