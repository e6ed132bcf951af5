//! Site configuration.
//!
//! Pages may embed `<script id="site-config" type="application/json">` to
//! override storage keys or timings; absent or malformed config means the
//! built-in defaults.

use crate::dom;
use chronea_types::SiteConfig;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub fn load() -> SiteConfig {
    let Some(el) = dom::by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    let raw = el.text_content().unwrap_or_default();
    parse(&raw)
}

fn parse(raw: &str) -> SiteConfig {
    if raw.trim().is_empty() {
        return SiteConfig::default();
    }
    match serde_json::from_str::<SiteConfig>(raw) {
        Ok(config) => config,
        Err(err) => {
            gloo_console::warn!(format!("ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, err));
            SiteConfig::default()
        }
    }
}
