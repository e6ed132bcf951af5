use crate::{SnapshotSource, Wishlist, WishlistError};
use chronea_storage::KeyValueStore;
use chronea_types::{DEFAULT_WISHLIST_KEY, ProductSnapshot};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
}

/// Emitted after a mutation has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistEvent {
    pub kind: ChangeKind,
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&WishlistEvent)>;

/// Handle over the persisted wishlist.
///
/// Every operation is a full read-modify-write of the blob under `key`;
/// concurrent writers through other handles are last-writer-wins.
pub struct WishlistStore<S> {
    storage: S,
    key: String,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<S: KeyValueStore> WishlistStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_WISHLIST_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current wishlist. Anything unreadable comes back empty.
    pub fn load(&self) -> Wishlist {
        match self.read() {
            Ok(list) => list,
            Err(err) => {
                warn!("{}; treating wishlist as empty", err);
                Wishlist::default()
            }
        }
    }

    pub fn count(&self) -> usize {
        self.load().len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.load().contains(name)
    }

    /// Appends `product`, or removes the entry already holding its name.
    pub fn add(&self, product: ProductSnapshot) -> Result<Wishlist, WishlistError> {
        let mut list = self.load();
        if list.contains(&product.name) {
            debug!("'{}' already wishlisted, toggling off", product.name);
            return self.remove_from(list, &product.name);
        }

        let name = product.name.clone();
        list.push(product);
        self.write(&list)?;
        debug!("wishlisted '{}' ({} total)", name, list.len());
        self.notify(&WishlistEvent {
            kind: ChangeKind::Added,
            name,
            count: list.len(),
        });
        Ok(list)
    }

    pub fn remove(&self, name: &str) -> Result<Wishlist, WishlistError> {
        let list = self.load();
        self.remove_from(list, name)
    }

    /// Toggles whatever `source` currently shows. `None` when it shows nothing.
    pub fn add_from<P: SnapshotSource + ?Sized>(
        &self,
        source: &P,
    ) -> Result<Option<Wishlist>, WishlistError> {
        match source.snapshot() {
            Some(product) => self.add(product).map(Some),
            None => Ok(None),
        }
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&WishlistEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn remove_from(&self, mut list: Wishlist, name: &str) -> Result<Wishlist, WishlistError> {
        if list.take(name).is_none() {
            return Ok(list);
        }

        self.write(&list)?;
        debug!("removed '{}' from wishlist ({} left)", name, list.len());
        self.notify(&WishlistEvent {
            kind: ChangeKind::Removed,
            name: name.to_owned(),
            count: list.len(),
        });
        Ok(list)
    }

    fn read(&self) -> Result<Wishlist, WishlistError> {
        let raw = self
            .storage
            .get(&self.key)
            .map_err(|err| self.unreadable(err.to_string()))?;
        let Some(raw) = raw else {
            return Ok(Wishlist::default());
        };

        // A stored `null` is as good as nothing stored.
        let mut list = serde_json::from_str::<Option<Wishlist>>(&raw)
            .map_err(|err| self.unreadable(err.to_string()))?
            .unwrap_or_default();

        let dropped = list.dedup_names();
        if dropped > 0 {
            warn!("dropped {} duplicate wishlist entries under '{}'", dropped, self.key);
        }
        Ok(list)
    }

    fn write(&self, list: &Wishlist) -> Result<(), WishlistError> {
        let encoded = serde_json::to_string(list)?;
        self.storage
            .set(&self.key, &encoded)
            .map_err(|source| WishlistError::PersistenceWriteFailed {
                key: self.key.clone(),
                source,
            })
    }

    fn unreadable(&self, reason: String) -> WishlistError {
        WishlistError::PersistedStateUnreadable {
            key: self.key.clone(),
            reason,
        }
    }

    fn notify(&self, event: &WishlistEvent) {
        for (_, observer) in &self.observers {
            observer(event);
        }
    }
}
