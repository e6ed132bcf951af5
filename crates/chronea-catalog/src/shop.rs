//! Shop grid filtering and sorting.

use std::cmp::Ordering;

/// Attributes a product card exposes for filtering and sorting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopCard {
    pub name: String,
    pub gender: String,
    /// Release date in epoch milliseconds; NaN when the card has no valid date.
    pub released_ms: f64,
    pub movement: String,
    pub material: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenderFilter {
    selected: Vec<String>,
}

impl GenderFilter {
    pub fn from_selected<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            selected: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Nothing selected shows every card.
    pub fn is_visible(&self, gender: &str) -> bool {
        self.selected.is_empty() || self.selected.iter().any(|g| g == gender)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Default,
    Name,
    Newest,
    Movement,
    Material,
}

impl SortKey {
    pub fn parse(value: &str) -> Self {
        match value {
            "name" => SortKey::Name,
            "new" => SortKey::Newest,
            "movement" => SortKey::Movement,
            "material" => SortKey::Material,
            _ => SortKey::Default,
        }
    }
}

pub fn compare(key: SortKey, a: &ShopCard, b: &ShopCard) -> Ordering {
    match key {
        SortKey::Default => Ordering::Equal,
        SortKey::Name => locale_compare(&a.name, &b.name),
        SortKey::Movement => locale_compare(&a.movement, &b.movement),
        SortKey::Material => locale_compare(&a.material, &b.material),
        SortKey::Newest => newest_first(a.released_ms, b.released_ms),
    }
}

/// Stable in-place sort of `items` by the card each one maps to.
pub fn arrange<T, F>(items: &mut [T], key: SortKey, attrs: F)
where
    F: Fn(&T) -> &ShopCard,
{
    if key == SortKey::Default {
        return;
    }
    items.sort_by(|a, b| compare(key, attrs(a), attrs(b)));
}

// Undated cards go last so the ordering stays total.
fn newest_first(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}

// Case differences only break ties, so "aviator" sorts next to "Aviator".
fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(
        name: &str,
        gender: &str,
        released_ms: f64,
        movement: &str,
        material: &str,
    ) -> ShopCard {
        ShopCard {
            name: name.to_owned(),
            gender: gender.to_owned(),
            released_ms,
            movement: movement.to_owned(),
            material: material.to_owned(),
        }
    }

    fn grid() -> Vec<ShopCard> {
        vec![
            card("Royal Emblem", "men", 1_700_000_000_000.0, "manual", "gold"),
            card("aviator X", "men", 1_720_000_000_000.0, "quartz", "titanium"),
            card("Pearl Essence", "women", 1_710_000_000_000.0, "quartz", "platinum"),
            card("Celestial Rose", "women", f64::NAN, "automatic", "gold"),
        ]
    }

    fn names(cards: &[ShopCard]) -> Vec<&str> {
        cards.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn empty_selection_shows_everything() {
        let filter = GenderFilter::default();
        assert!(grid().iter().all(|c| filter.is_visible(&c.gender)));
        assert!(filter.is_visible(""));
    }

    #[test]
    fn selection_limits_to_chosen_genders() {
        let filter = GenderFilter::from_selected(["women"]);
        let visible: Vec<_> = grid()
            .into_iter()
            .filter(|c| filter.is_visible(&c.gender))
            .map(|c| c.name)
            .collect();
        assert_eq!(visible, vec!["Pearl Essence", "Celestial Rose"]);

        let both = GenderFilter::from_selected(vec!["men".to_owned(), "women".to_owned()]);
        assert!(grid().iter().all(|c| both.is_visible(&c.gender)));
        assert!(!both.is_visible("unisex"));
    }

    #[test]
    fn sort_key_parsing() {
        assert_eq!(SortKey::parse("name"), SortKey::Name);
        assert_eq!(SortKey::parse("new"), SortKey::Newest);
        assert_eq!(SortKey::parse("movement"), SortKey::Movement);
        assert_eq!(SortKey::parse("material"), SortKey::Material);
        assert_eq!(SortKey::parse("featured"), SortKey::Default);
        assert_eq!(SortKey::parse(""), SortKey::Default);
    }

    #[test]
    fn default_keeps_grid_order() {
        let mut cards = grid();
        arrange(&mut cards, SortKey::Default, |c| c);
        assert_eq!(
            names(&cards),
            vec!["Royal Emblem", "aviator X", "Pearl Essence", "Celestial Rose"]
        );
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut cards = grid();
        arrange(&mut cards, SortKey::Name, |c| c);
        assert_eq!(
            names(&cards),
            vec!["aviator X", "Celestial Rose", "Pearl Essence", "Royal Emblem"]
        );
    }

    #[test]
    fn movement_sort_is_stable_for_ties() {
        let mut cards = grid();
        arrange(&mut cards, SortKey::Movement, |c| c);
        assert_eq!(
            names(&cards),
            vec!["Celestial Rose", "Royal Emblem", "aviator X", "Pearl Essence"]
        );
    }

    #[test]
    fn material_sort() {
        let mut cards = grid();
        arrange(&mut cards, SortKey::Material, |c| c);
        assert_eq!(
            names(&cards),
            vec!["Royal Emblem", "Celestial Rose", "Pearl Essence", "aviator X"]
        );
    }

    #[test]
    fn newest_first_with_valid_dates() {
        let mut cards: Vec<_> = grid()
            .into_iter()
            .filter(|c| !c.released_ms.is_nan())
            .collect();
        arrange(&mut cards, SortKey::Newest, |c| c);
        assert_eq!(
            names(&cards),
            vec!["aviator X", "Pearl Essence", "Royal Emblem"]
        );
    }

    #[test]
    fn undated_cards_sort_last() {
        let mut cards = grid();
        arrange(&mut cards, SortKey::Newest, |c| c);
        assert_eq!(
            names(&cards),
            vec!["aviator X", "Pearl Essence", "Royal Emblem", "Celestial Rose"]
        );

        let undated = card("B", "men", f64::NAN, "", "");
        assert_eq!(compare(SortKey::Newest, &undated, &undated.clone()), Ordering::Equal);
    }

    #[test]
    fn arrange_works_through_a_projection() {
        let mut rows: Vec<(u32, ShopCard)> = grid()
            .into_iter()
            .enumerate()
            .map(|(i, c)| (i as u32, c))
            .collect();
        arrange(&mut rows, SortKey::Name, |(_, c)| c);
        let order: Vec<u32> = rows.iter().map(|(i, _)| *i).collect();
        assert_eq!(order, vec![1, 3, 2, 0]);
    }
}
