//! Donut Card Component
//!
//! One catalog entry with its favorite star and score.

use leptos::prelude::*;

use crate::context::use_favorites;
use crate::models::CatalogItem;
use crate::store::{store_is_up, store_score};

/// Card for a single donut
#[component]
pub fn DonutCard(item: CatalogItem) -> impl IntoView {
    let favorites = use_favorites();
    let id = item.id;

    let vote_class = move || {
        if store_is_up(&favorites.state, id) { "vote-btn up active" } else { "vote-btn up" }
    };

    view! {
        <div class="donut-card">
            <div class="donut-img-container">
                <img src=item.img alt=item.name />
                <button
                    class=vote_class
                    on:click=move |ev| {
                        ev.stop_propagation();
                        if let Err(e) = favorites.toggle_up(id) {
                            log::error!("{}", e);
                        }
                    }
                >
                    "★"
                </button>
            </div>
            <h4>{item.name}</h4>
            <div id=format!("score-{}", id) class="score-display">
                {move || format!("{} favorited", store_score(&favorites.state, id))}
            </div>
        </div>
    }
}
