//! Application Context
//!
//! The page's vote store, provided via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::DONUTS;
use crate::config::AppConfig;
use crate::error::VoteError;
use crate::models::VoteRecord;
use crate::storage::{BrowserStorage, KeyValueStorage, MemoryStorage};
use crate::store::{store_apply_change, FavoritesState, FavoritesStore};
use crate::votes::{VoteChange, VoteStore};

/// Vote store plus its reactive read model
#[derive(Clone, Copy)]
pub struct FavoritesContext {
    /// Owning store; `web_sys::Storage` is not `Send`, hence local storage
    votes: StoredValue<VoteStore, LocalStorage>,
    /// Read model for rendering
    pub state: FavoritesStore,
}

impl FavoritesContext {
    /// Build the page's vote store on `localStorage`
    pub fn new(config: &AppConfig) -> Self {
        let storage: Box<dyn KeyValueStorage> = match BrowserStorage::local() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{}; votes will last until reload", e);
                Box::new(MemoryStorage::new())
            }
        };
        Self::with_storage(config, storage)
    }

    /// Build a vote store on the given storage and wire it to a fresh reactive state
    pub fn with_storage(config: &AppConfig, storage: Box<dyn KeyValueStorage>) -> Self {
        let mut votes = VoteStore::load(storage, config.storage_key.clone(), DONUTS);
        let state = Store::new(FavoritesState {
            records: votes.records().clone(),
        });
        votes.subscribe(move |change| store_apply_change(&state, change));

        let favorited = DONUTS
            .iter()
            .filter(|d| votes.record(d.id).is_some_and(VoteRecord::is_up))
            .count();
        log::debug!("Restored {} favorites", favorited);

        Self {
            votes: StoredValue::new_local(votes),
            state,
        }
    }

    /// Toggle the user's favorite on an item
    pub fn toggle_up(&self, item_id: &str) -> Result<VoteChange, VoteError> {
        self.votes
            .try_update_value(|votes| votes.toggle_up(item_id))
            .unwrap_or(Err(VoteError::Disposed))
    }
}

/// Get the favorites context
pub fn use_favorites() -> FavoritesContext {
    expect_context::<FavoritesContext>()
}
