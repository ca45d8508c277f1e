//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The `store_*`
//! helpers below are the only mutation entry points, so every view observes
//! one consistent snapshot of the list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Item, MAX_QUANTITY};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The packing list, in insertion order
    pub items: Vec<Item>,
    /// Next id to assign; never reused within a session, even after removals
    pub next_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new unpacked item to the list.
///
/// Silent no-op when the description is empty or the quantity falls outside
/// 1..=MAX_QUANTITY. Existing items and their order are untouched.
pub fn store_add_item(store: &AppStore, description: &str, quantity: u8) {
    if description.is_empty() || quantity < 1 || quantity > MAX_QUANTITY {
        return;
    }
    let id = store.next_id().get_untracked();
    store
        .items()
        .write()
        .push(Item::new(id, description.to_string(), quantity));
    *store.next_id().write() = id + 1;
}

/// Flip the packed flag on the item with the given id; no-op when absent
pub fn store_toggle_packed(store: &AppStore, item_id: u32) {
    store
        .items()
        .write()
        .iter_mut()
        .find(|item| item.id == item_id)
        .map(|item| item.packed = !item.packed);
}

/// Remove the item with the given id, keeping the remaining order; no-op when absent
pub fn store_remove_item(store: &AppStore, item_id: u32) {
    store.items().write().retain(|item| item.id != item_id);
}

/// Empty the list, but only once the confirmation prompt was accepted
pub fn store_clear_items(store: &AppStore, confirmed: bool) {
    if !confirmed {
        return;
    }
    store.items().write().clear();
}
