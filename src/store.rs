//! Collection Store
//!
//! Single source of truth for the cart and favorites.
//! Uses Leptos reactive_stores for fine-grained reactivity; every mutation is
//! written through to snapshot storage.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::CartSource;
use crate::collection::Collection;
use crate::models::{Item, ItemId};
use crate::persistence::{load_snapshot, save_snapshot, CollectionKind, SnapshotStorage};

/// Startup state of the remote cart
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CartStatus {
    /// Remote cart not fetched yet
    #[default]
    Pending,
    /// Remote snapshot applied
    Loaded,
    /// Fetch failed; the cart started empty
    Unavailable(String),
}

/// Shop state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    pub cart: Collection,
    pub favorites: Collection,
    pub cart_status: CartStatus,
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Handle to the shop's collections. Copy, so it can move into any closure.
#[derive(Clone, Copy)]
pub struct CollectionStore {
    state: ShopStore,
    storage: StoredValue<Arc<dyn SnapshotStorage>>,
}

impl CollectionStore {
    pub fn new(storage: Arc<dyn SnapshotStorage>) -> Self {
        Self {
            state: Store::new(ShopState::default()),
            storage: StoredValue::new(storage),
        }
    }

    /// Seed state once at startup.
    ///
    /// Favorites come from local storage. The cart comes from `remote` only; a
    /// locally persisted cart is never read back. The fetched snapshot replaces
    /// whatever the cart held while the fetch was in flight.
    pub async fn initialize(&self, remote: &dyn CartSource) {
        let storage = self.storage.get_value();
        let favorites = load_snapshot(storage.as_ref(), CollectionKind::Favorites)
            .unwrap_or_else(|e| {
                log::warn!("Ignoring stored favorites: {}", e);
                Collection::new()
            });
        log::info!("Loaded {} favorites", favorites.len());
        self.state.favorites().set(favorites);

        match remote.fetch_cart().await {
            Ok(items) => {
                let cart = Collection::from(items);
                log::info!("Loaded remote cart with {} items", cart.len());
                self.state.cart().set(cart);
                self.state.cart_status().set(CartStatus::Loaded);
            }
            Err(e) => {
                log::error!("Remote cart unavailable: {}", e);
                self.state.cart_status().set(CartStatus::Unavailable(e.to_string()));
            }
        }
    }

    // ========================
    // Intents
    // ========================

    /// Append `item` unless its id is already in the cart. Returns true if added.
    pub fn add_to_cart(&self, item: Item) -> bool {
        self.apply(CollectionKind::Cart, |cart| cart.insert(item))
    }

    /// Returns true if an item was removed.
    pub fn remove_from_cart(&self, item_id: ItemId) -> bool {
        self.apply(CollectionKind::Cart, |cart| cart.remove(item_id))
    }

    pub fn add_to_favorites(&self, item: Item) -> bool {
        self.apply(CollectionKind::Favorites, |favorites| favorites.insert(item))
    }

    pub fn remove_from_favorites(&self, item_id: ItemId) -> bool {
        self.apply(CollectionKind::Favorites, |favorites| favorites.remove(item_id))
    }

    /// Add to favorites, or remove if already there
    pub fn toggle_favorite(&self, item: Item) {
        if self.is_favorite(item.id) {
            self.remove_from_favorites(item.id);
        } else {
            self.add_to_favorites(item);
        }
    }

    /// Run `change` and persist the result, all under one write guard.
    /// Subscribers are notified only when `change` reports a modification.
    fn apply(&self, kind: CollectionKind, change: impl FnOnce(&mut Collection) -> bool) -> bool {
        let storage = self.storage.get_value();
        let field = match kind {
            CollectionKind::Cart => self.state.cart(),
            CollectionKind::Favorites => self.state.favorites(),
        };
        let changed = field
            .try_maybe_update(|collection| {
                let changed = change(collection);
                persist(storage.as_ref(), kind, collection);
                (changed, changed)
            })
            .unwrap_or(false);
        log::debug!("{} mutation applied (changed: {})", kind.key(), changed);
        changed
    }

    // ========================
    // Readers (tracked)
    // ========================

    pub fn cart(&self) -> Collection {
        self.state.cart().get()
    }

    pub fn favorites(&self) -> Collection {
        self.state.favorites().get()
    }

    pub fn cart_status(&self) -> CartStatus {
        self.state.cart_status().get()
    }

    pub fn in_cart(&self, item_id: ItemId) -> bool {
        self.state.cart().with(|cart| cart.contains(item_id))
    }

    pub fn is_favorite(&self, item_id: ItemId) -> bool {
        self.state.favorites().with(|favorites| favorites.contains(item_id))
    }
}

/// Best-effort write; in-memory state stays authoritative on failure
fn persist(storage: &dyn SnapshotStorage, kind: CollectionKind, collection: &Collection) {
    if let Err(e) = save_snapshot(storage, kind, collection) {
        log::warn!("Failed to persist {} snapshot: {}", kind.key(), e);
    }
}

/// Make the store available to all children
pub fn provide_collection_store(store: CollectionStore) {
    provide_context(store);
}

/// Get the collection store from context
pub fn use_collection_store() -> CollectionStore {
    expect_context::<CollectionStore>()
}
