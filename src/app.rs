//! Danky Donuts App
//!
//! Main page component.

use leptos::prelude::*;

use crate::components::FavoritesGrid;
use crate::config::AppConfig;
use crate::context::FavoritesContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // One vote store per page load, shared with every card
    provide_context(FavoritesContext::new(&config));

    view! {
        <div class="app-layout">
            <header class="hero">
                <h1>"Danky Donuts"</h1>
                <p class="tagline">"Pick your favorites. We remember."</p>
            </header>

            <main class="main-content">
                <FavoritesGrid />
            </main>
        </div>
    }
}
