//! Shop grid: gender filter, sort select and the mobile filter drawer.

use crate::dom::{self, Elements};
use chronea_catalog::shop::{self, GenderFilter, ShopCard, SortKey};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Cards in their current grid order. Sorting is applied to this order, so
/// ties keep whatever the previous sort left.
pub type Grid = Rc<RefCell<Vec<(ShopCard, Element)>>>;

/// Capture the grid's cards, or `None` when the page has no shop grid.
pub fn capture(els: &Elements) -> Option<Grid> {
    let grid = els.product_grid.as_ref()?;
    let cards = dom::query_all_within(grid, ".product-card")
        .into_iter()
        .map(|el| (read_card(&el), el))
        .collect();
    Some(Rc::new(RefCell::new(cards)))
}

fn read_card(el: &Element) -> ShopCard {
    let attr = |name: &str| el.get_attribute(name).unwrap_or_default();
    ShopCard {
        name: attr("data-name"),
        gender: attr("data-gender"),
        released_ms: js_sys::Date::parse(&attr("data-date")),
        movement: attr("data-movement"),
        material: attr("data-material"),
    }
}

pub fn filter_and_sort(els: &Elements, cards: &Grid) -> Result<(), JsValue> {
    let filter = GenderFilter::from_selected(
        els.gender_checkboxes
            .iter()
            .filter(|cb| cb.checked())
            .map(|cb| cb.value()),
    );

    let mut cards = cards.borrow_mut();
    for (card, el) in cards.iter() {
        let visible = filter.is_visible(&card.gender);
        dom::set_style(el, "display", if visible { "block" } else { "none" });
    }

    let (Some(select), Some(grid)) = (&els.sort_select, &els.product_grid) else {
        return Ok(());
    };
    let key = SortKey::parse(&dom::get_select_value(select));
    shop::arrange(cards.as_mut_slice(), key, |(card, _)| card);

    // re-appending moves each card to the end, leaving them in sorted order
    for (_, el) in cards.iter() {
        grid.append_child(el)?;
    }
    Ok(())
}

pub fn filter_icon(open: bool) -> &'static str {
    if open { "close-outline" } else { "options-outline" }
}

pub fn toggle_filters(els: &Elements) {
    let (Some(btn), Some(sidebar)) = (&els.filter_toggle, &els.filters_sidebar) else {
        return;
    };
    let open = !dom::has_class(sidebar, "active");
    dom::toggle_class(sidebar, "active", open);
    dom::set_icon(btn, filter_icon(open));
}
