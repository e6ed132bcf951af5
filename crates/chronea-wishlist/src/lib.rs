//! Persisted, deduplicated wishlist of liked products.
//!
//! [`WishlistStore`] owns the list under one storage key and reports every
//! mutation to the observers registered on it. Callers scrape product data
//! through a [`SnapshotSource`] and do all rendering themselves.

mod error;
mod store;

pub use error::WishlistError;
pub use store::{ChangeKind, SubscriptionId, WishlistEvent, WishlistStore};

use chronea_types::ProductSnapshot;
use serde::{Deserialize, Serialize};

/// Something that can produce a snapshot of the product currently on view.
pub trait SnapshotSource {
    fn snapshot(&self) -> Option<ProductSnapshot>;
}

impl SnapshotSource for ProductSnapshot {
    fn snapshot(&self) -> Option<ProductSnapshot> {
        Some(self.clone())
    }
}

/// Ordered liked products; names are unique and insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    items: Vec<ProductSnapshot>,
}

impl Wishlist {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductSnapshot> {
        self.items.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&ProductSnapshot> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    fn push(&mut self, product: ProductSnapshot) {
        self.items.push(product);
    }

    fn take(&mut self, name: &str) -> Option<ProductSnapshot> {
        let index = self.items.iter().position(|item| item.name == name)?;
        Some(self.items.remove(index))
    }

    /// Keeps the first entry for each name. Returns how many were dropped.
    fn dedup_names(&mut self) -> usize {
        let before = self.items.len();
        let mut seen = std::collections::HashSet::new();
        self.items.retain(|item| seen.insert(item.name.clone()));
        before - self.items.len()
    }
}

impl<'a> IntoIterator for &'a Wishlist {
    type Item = &'a ProductSnapshot;
    type IntoIter = std::slice::Iter<'a, ProductSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Wishlist {
    type Item = ProductSnapshot;
    type IntoIter = std::vec::IntoIter<ProductSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
