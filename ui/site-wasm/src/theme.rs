//! Light/dark theme switching.
//!
//! Light mode is `data-theme="light"` on `<body>`; dark is the absence of
//! the attribute. The toggle icon shows the mode a click switches to.

use crate::dom::{self, Elements};
use crate::state;
use crate::storage::BrowserStorage;
use chronea_storage::prefs;
use chronea_types::ThemeMode;

pub fn toggle_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "moon-outline",
        ThemeMode::Dark => "sunny-outline",
    }
}

pub fn current(els: &Elements) -> ThemeMode {
    ThemeMode::from_stored(els.body.get_attribute("data-theme").as_deref())
}

pub fn apply(els: &Elements, mode: ThemeMode) {
    match mode {
        ThemeMode::Light => {
            let _ = els.body.set_attribute("data-theme", "light");
        }
        ThemeMode::Dark => {
            let _ = els.body.remove_attribute("data-theme");
        }
    }
    if let Some(btn) = &els.theme_toggle {
        dom::set_icon(btn, toggle_icon(mode));
    }
}

/// Apply the saved theme. Runs before anything else renders.
pub fn restore(els: &Elements) -> ThemeMode {
    let key = state::config().theme_key;
    let mode = prefs::load_theme(&BrowserStorage, &key);
    apply(els, mode);
    mode
}

pub fn toggle(els: &Elements) {
    let next = current(els).toggled();
    apply(els, next);

    let key = state::config().theme_key;
    if let Err(err) = prefs::save_theme(&BrowserStorage, &key, next) {
        gloo_console::warn!(format!("theme not saved: {}", err));
    }
}
