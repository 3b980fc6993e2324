//! Reactive Favorites State
//!
//! Uses Leptos reactive_stores as a read model of the vote store,
//! fed by its change notifications.

use std::collections::BTreeMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::VoteRecord;
use crate::votes::VoteChange;

/// What the cards render: one record per catalog item
#[derive(Clone, Debug, Default, Store)]
pub struct FavoritesState {
    pub records: BTreeMap<String, VoteRecord>,
}

pub type FavoritesStore = Store<FavoritesState>;

/// Apply a vote change to the reactive state
pub fn store_apply_change(store: &FavoritesStore, change: &VoteChange) {
    store
        .records()
        .write()
        .insert(change.item_id.clone(), change.record);
}

/// Current score of an item (0 if unknown)
pub fn store_score(store: &FavoritesStore, item_id: &str) -> i64 {
    store
        .records()
        .read()
        .get(item_id)
        .map(|r| r.score)
        .unwrap_or_default()
}

/// Whether the user has favorited an item
pub fn store_is_up(store: &FavoritesStore, item_id: &str) -> bool {
    store
        .records()
        .read()
        .get(item_id)
        .is_some_and(VoteRecord::is_up)
}
