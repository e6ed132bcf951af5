//! Global page state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Observers run while the state is borrowed shared, so they may call
//! [`with`] but never [`with_mut`].

use crate::storage::BrowserStorage;
use chronea_types::SiteConfig;
use chronea_wishlist::WishlistStore;
use std::cell::RefCell;

pub struct SiteState {
    pub config: SiteConfig,
    pub wishlist: WishlistStore<BrowserStorage>,
}

impl Default for SiteState {
    fn default() -> Self {
        Self::from_config(SiteConfig::default())
    }
}

impl SiteState {
    fn from_config(config: SiteConfig) -> Self {
        let wishlist = WishlistStore::with_key(BrowserStorage, config.wishlist_key.clone());
        Self { config, wishlist }
    }
}

// ── Thread-local singleton ──

thread_local! {
    static STATE: RefCell<SiteState> = RefCell::new(SiteState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&SiteState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut SiteState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

/// Replace the state for a new configuration. Drops existing subscriptions.
pub fn configure(config: SiteConfig) {
    with_mut(|s| *s = SiteState::from_config(config));
}

// ── Convenience accessors ──

pub fn config() -> SiteConfig {
    with(|s| s.config.clone())
}
