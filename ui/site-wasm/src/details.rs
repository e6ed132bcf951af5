//! Product-details page population from the static catalog.

use crate::dom;
use chronea_catalog::ProductDetail;
use chronea_types::SiteConfig;
use web_sys::{Element, HtmlImageElement, UrlSearchParams};

pub const DETAILS_PAGE: &str = "product-details.html";

/// `?id=` of the current details page. `None` on any other page.
fn requested_id() -> Option<Option<String>> {
    let location = dom::window().location();
    let path = location.pathname().unwrap_or_default();
    if !path.contains(DETAILS_PAGE) {
        return None;
    }

    let search = location.search().unwrap_or_default();
    Some(
        UrlSearchParams::new_with_str(&search)
            .ok()
            .and_then(|params| params.get("id")),
    )
}

/// Catalog entry the current details page shows, if any.
pub fn current_product(config: &SiteConfig) -> Option<&'static ProductDetail> {
    let id = requested_id()?;
    chronea_catalog::lookup_or(id.as_deref(), &config.default_product_id)
}

/// Fill the details page for `?id=`. Other pages, and unknown ids, are left
/// as authored.
pub fn populate(config: &SiteConfig) {
    let Some(id) = requested_id() else {
        return;
    };

    match chronea_catalog::lookup_or(id.as_deref(), &config.default_product_id) {
        Some(product) => render(product),
        None => gloo_console::warn!(format!(
            "no catalog entry for product id '{}'",
            id.as_deref().unwrap_or_default()
        )),
    }
}

fn render(product: &ProductDetail) {
    dom::document().set_title(&product.page_title());

    if let Some(img) = dom::query_typed::<HtmlImageElement>(".detail-img-wrapper img") {
        img.set_src(product.img);
        img.set_alt(product.name);
    }

    if let Some(el) = dom::query(".product-cat") {
        dom::set_text(&el, product.cat);
    }
    if let Some(el) = dom::query("h1") {
        dom::set_text(&el, product.name);
    }
    if let Some(el) = dom::query(".detail-info p[style*=\"font-size: 1.2rem\"]") {
        dom::set_text(&el, &product.model_label());
    }
    if let Some(el) = dom::query(".detail-info h2") {
        dom::set_text(&el, product.price);
    }

    if let Some(info) = dom::query(".detail-info") {
        // the description is the first paragraph without an inline font size
        let description = dom::query_all_within(&info, "p")
            .into_iter()
            .find(|p| dom::style_value(p, "font-size").is_empty());
        if let Some(p) = description {
            dom::set_text(&p, product.description);
        }
    }

    let spec_items = dom::query_all(".spec-item");
    if spec_items.len() >= 5 {
        for (item, value) in spec_items.iter().zip(product.specs()) {
            set_spec_value(item, value);
        }
    }

    if let Some(story) = dom::query("section.section.bg-darker") {
        if let Some(p) = dom::query_within(&story, "p") {
            dom::set_text(&p, product.story);
        }
    }
}

fn set_spec_value(item: &Element, value: &str) {
    if let Some(span) = dom::query_within(item, "span:last-child") {
        dom::set_text(&span, value);
    }
}
