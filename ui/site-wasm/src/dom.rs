//! DOM element bindings.
//!
//! Pages share one script, so everything except `<body>` is optional and
//! resolved once at startup. Add new page elements to `Elements::bind()`.

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
};

// ── Helpers ──

fn doc() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn query_typed<T: JsCast>(selector: &str) -> Option<T> {
    query(selector).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match doc().query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(_) => Vec::new(),
    }
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(_) => Vec::new(),
    }
}

fn collect(nl: &web_sys::NodeList) -> Vec<Element> {
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok()?
}

/// Rendered text of the first match inside `parent`.
pub fn text_within(parent: &Element, selector: &str) -> Option<String> {
    let el = query_within(parent, selector)?;
    Some(rendered_text(&el))
}

pub fn rendered_text(el: &Element) -> String {
    match el.dyn_ref::<HtmlElement>() {
        Some(html) => html.inner_text(),
        None => el.text_content().unwrap_or_default(),
    }
}

pub fn set_text(el: &Element, text: &str) {
    match el.dyn_ref::<HtmlElement>() {
        Some(html) => html.set_inner_text(text),
        None => el.set_text_content(Some(text)),
    }
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn style_value(el: &Element, property: &str) -> String {
    el.dyn_ref::<HtmlElement>()
        .and_then(|html| html.style().get_property_value(property).ok())
        .unwrap_or_default()
}

pub fn get_select_value(el: &HtmlSelectElement) -> String {
    el.value()
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

/// Point the first `<ion-icon>` inside `el` at another glyph.
pub fn set_icon(el: &Element, name: &str) {
    if let Some(icon) = query_within(el, "ion-icon") {
        let _ = icon.set_attribute("name", name);
    }
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    doc().create_element(tag)
}

/// Create `<tag class="...">` with optional text content.
pub fn create_with(tag: &str, class: &str, text: Option<&str>) -> Result<Element, JsValue> {
    let el = create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if let Some(text) = text {
        el.set_text_content(Some(text));
    }
    Ok(el)
}

pub fn document() -> Document {
    doc()
}

// ── Elements struct ──

/// Page elements used by the site script.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub body: HtmlElement,
    pub theme_toggle: Option<Element>,

    // Wishlist page
    pub wishlist_container: Option<Element>,
    pub empty_wishlist_msg: Option<Element>,

    // Shop page
    pub product_grid: Option<Element>,
    pub gender_checkboxes: Vec<HtmlInputElement>,
    pub sort_select: Option<HtmlSelectElement>,
    pub filter_toggle: Option<Element>,
    pub filters_sidebar: Option<Element>,

    pub forms: Vec<HtmlFormElement>,
}

impl Elements {
    /// Resolve all DOM references. Call once the document is parsed.
    pub fn bind() -> Result<Elements, JsValue> {
        let body = doc()
            .body()
            .ok_or_else(|| JsValue::from_str("missing <body>"))?;

        Ok(Elements {
            body,
            theme_toggle: by_id("theme-toggle"),

            wishlist_container: by_id("wishlist-container"),
            empty_wishlist_msg: by_id("empty-wishlist-msg"),

            product_grid: by_id("product-grid"),
            gender_checkboxes: query_all("input[name=\"gender\"]")
                .into_iter()
                .filter_map(|e| e.dyn_into::<HtmlInputElement>().ok())
                .collect(),
            sort_select: by_id_typed::<HtmlSelectElement>("sort-select"),
            filter_toggle: by_id("filter-toggle"),
            filters_sidebar: query(".filters"),

            forms: query_all("form")
                .into_iter()
                .filter_map(|e| e.dyn_into::<HtmlFormElement>().ok())
                .collect(),
        })
    }
}
