//! Wishlist controls, badge and the wishlist page.
//!
//! Every display surface registers itself on the store once at startup and
//! redraws from the events it receives; click handlers only toggle.

use crate::details;
use crate::dom::{self, Elements};
use crate::state;
use chronea_catalog::ProductDetail;
use chronea_types::ProductSnapshot;
use chronea_wishlist::{ChangeKind, SnapshotSource, Wishlist, WishlistEvent};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlAnchorElement, HtmlImageElement};

const DETAILS_ADDED_HTML: &str = r#"<ion-icon name="heart" style="vertical-align: middle; margin-right: 5px; color: var(--color-accent);"></ion-icon> Added to Wishlist"#;
const DETAILS_ADD_HTML: &str = r#"<ion-icon name="heart-outline" style="vertical-align: middle; margin-right: 5px;"></ion-icon> Add to Wishlist"#;

// ── Snapshot sources ──

/// A `.product-card` in a grid.
pub struct CardSource<'a> {
    pub card: &'a Element,
}

impl SnapshotSource for CardSource<'_> {
    fn snapshot(&self) -> Option<ProductSnapshot> {
        let name = dom::text_within(self.card, ".product-title")?;
        let image = dom::query_within(self.card, "img")
            .and_then(|e| e.dyn_into::<HtmlImageElement>().ok())
            .map(|img| img.src())
            .unwrap_or_default();
        let link = dom::query_within(self.card, "a")
            .and_then(|e| e.dyn_into::<HtmlAnchorElement>().ok())
            .map(|a| a.href())
            .unwrap_or_default();

        Some(ProductSnapshot {
            name,
            category: dom::text_within(self.card, ".product-cat").unwrap_or_default(),
            price: dom::text_within(self.card, ".product-price").unwrap_or_default(),
            image,
            link,
        })
    }
}

/// The product-details page as a whole. Uses the catalog entry the page was
/// filled from, or the authored markup when there is none.
pub struct DetailsPageSource {
    pub product: Option<&'static ProductDetail>,
    pub link: String,
}

impl SnapshotSource for DetailsPageSource {
    fn snapshot(&self) -> Option<ProductSnapshot> {
        if let Some(product) = self.product {
            return Some(product.snapshot(&self.link));
        }

        let name = dom::query("h1").map(|h| dom::rendered_text(&h))?;
        let price = dom::query(".detail-info h2")
            .or_else(|| dom::query("h2"))
            .map(|h| dom::rendered_text(&h))
            .unwrap_or_default();
        let image = dom::query_typed::<HtmlImageElement>(".detail-img-wrapper img")
            .map(|img| img.src())
            .unwrap_or_default();

        Some(ProductSnapshot {
            name,
            category: dom::query(".product-cat")
                .map(|c| dom::rendered_text(&c))
                .unwrap_or_default(),
            price,
            image,
            link: self.link.clone(),
        })
    }
}

// ── Surfaces ──

/// Register badge, control and page observers on the store.
pub fn register_surfaces(els: &Elements) {
    state::with_mut(|s| {
        s.wishlist.subscribe(|event: &WishlistEvent| update_badges(event.count));
        s.wishlist.subscribe(|event: &WishlistEvent| {
            set_card_buttons(&event.name, event.kind == ChangeKind::Added);
        });
        s.wishlist.subscribe(|event: &WishlistEvent| {
            if details_heading().as_deref() == Some(event.name.as_str()) {
                set_details_button(event.kind == ChangeKind::Added);
            }
        });
        if let Some(container) = els.wishlist_container.clone() {
            let empty_msg = els.empty_wishlist_msg.clone();
            s.wishlist.subscribe(move |_: &WishlistEvent| {
                let list = state::with(|s| s.wishlist.load());
                if let Err(err) = render_page(&container, empty_msg.as_ref(), &list) {
                    gloo_console::error!("wishlist render failed", err);
                }
            });
        }
    });
}

/// Draw every surface from the persisted list once at page load.
pub fn sync(els: &Elements) -> Result<(), JsValue> {
    let list = state::with(|s| s.wishlist.load());
    update_badges(list.len());

    for item in &list {
        set_card_buttons(&item.name, true);
    }
    if let Some(heading) = details_heading() {
        set_details_button(list.contains(&heading));
    }

    if let Some(container) = &els.wishlist_container {
        render_page(container, els.empty_wishlist_msg.as_ref(), &list)?;
    }
    Ok(())
}

pub fn update_badges(count: usize) {
    for badge in dom::query_all(".wishlist-badge") {
        dom::set_text(&badge, &count.to_string());
        dom::toggle_class(&badge, "show", count > 0);
    }
}

fn set_card_buttons(name: &str, active: bool) {
    for btn in dom::query_all(".wishlist-btn-card") {
        if btn.get_attribute("data-name").as_deref() != Some(name) {
            continue;
        }
        dom::set_icon(&btn, if active { "heart" } else { "heart-outline" });
        dom::toggle_class(&btn, "active", active);
    }
}

fn set_details_button(active: bool) {
    if let Some(btn) = dom::query(".wishlist-btn-details") {
        dom::set_inner_html(&btn, details_label(active));
    }
}

pub fn details_label(active: bool) -> &'static str {
    if active {
        DETAILS_ADDED_HTML
    } else {
        DETAILS_ADD_HTML
    }
}

fn details_heading() -> Option<String> {
    dom::query(".wishlist-btn-details")?;
    dom::query("h1").map(|h| dom::rendered_text(&h))
}

/// Rebuild the wishlist page cards, keeping the empty-state message node.
pub fn render_page(
    container: &Element,
    empty_msg: Option<&Element>,
    list: &Wishlist,
) -> Result<(), JsValue> {
    let children = container.children();
    let mut stale = Vec::new();
    for i in 0..children.length() {
        if let Some(child) = children.item(i) {
            if child.id() != "empty-wishlist-msg" {
                stale.push(child);
            }
        }
    }
    for child in stale {
        container.remove_child(&child)?;
    }

    if let Some(msg) = empty_msg {
        dom::set_style(msg, "display", if list.is_empty() { "block" } else { "none" });
    }

    for item in list {
        let card = product_card(item)?;
        container.append_child(&card)?;
    }
    Ok(())
}

fn product_card(item: &ProductSnapshot) -> Result<Element, JsValue> {
    let article = dom::create_with("article", "product-card", None)?;

    let media = dom::create_with("div", "", None)?;
    dom::set_style(&media, "position", "relative");
    let img = dom::create_with("img", "product-img", None)?;
    img.set_attribute("src", &item.image)?;
    img.set_attribute("alt", &item.name)?;
    media.append_child(&img)?;

    let info = dom::create_with("div", "product-info", None)?;
    let cat = dom::create_with("div", "product-cat", Some(&item.category))?;
    let title = dom::create_with("h3", "product-title", Some(&item.name))?;
    let price = dom::create_with("div", "product-price", Some(&item.price))?;
    info.append_child(&cat)?;
    info.append_child(&title)?;
    info.append_child(&price)?;

    let link = dom::create_with("a", "btn btn-outline", Some("View Details"))?;
    link.set_attribute("href", &item.link)?;
    dom::set_style(&link, "width", "100%");
    info.append_child(&link)?;

    let remove = dom::create_with("button", "remove-btn", Some("Remove from Wishlist"))?;
    remove.set_attribute("data-name", &item.name)?;
    info.append_child(&remove)?;

    article.append_child(&media)?;
    article.append_child(&info)?;
    Ok(article)
}

// ── Click handling ──

/// Delegated click handler for every wishlist control on the page.
pub fn on_body_click(event: &web_sys::MouseEvent) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };

    if let Some(btn) = dom::closest(&target, ".wishlist-btn-card") {
        event.prevent_default();
        event.stop_propagation();
        if let Some(card) = dom::closest(&btn, ".product-card") {
            toggle(&CardSource { card: &card });
        }
        return;
    }

    if dom::closest(&target, ".wishlist-btn-details").is_some() {
        event.prevent_default();
        let link = dom::window().location().href().unwrap_or_default();
        let product = details::current_product(&state::config());
        toggle(&DetailsPageSource { product, link });
        return;
    }

    if let Some(btn) = dom::closest(&target, ".remove-btn") {
        if let Some(name) = btn.get_attribute("data-name") {
            if let Err(err) = state::with(|s| s.wishlist.remove(&name)) {
                gloo_console::warn!(format!("wishlist not saved: {}", err));
            }
        }
    }
}

fn toggle<P: SnapshotSource>(source: &P) {
    match state::with(|s| s.wishlist.add_from(source)) {
        Ok(Some(_)) => {}
        Ok(None) => gloo_console::warn!("wishlist control has no product to capture"),
        Err(err) => gloo_console::warn!(format!("wishlist not saved: {}", err)),
    }
}
