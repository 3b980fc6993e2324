//! Favorites Grid Component

use leptos::prelude::*;

use crate::catalog::DONUTS;
use super::DonutCard;

/// Grid of every donut on the menu
#[component]
pub fn FavoritesGrid() -> impl IntoView {
    view! {
        <section id="favorites" class="favorites-section">
            <h2>"Fan Favorites"</h2>
            <div id="favorites-grid" class="favorites-grid">
                {DONUTS.iter().map(|d| view! { <DonutCard item=*d /> }).collect_view()}
            </div>
        </section>
    }
}
