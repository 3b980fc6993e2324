//! UI Components
//!
//! Leptos components for the favorites section.

mod donut_card;
mod favorites_grid;

pub use donut_card::DonutCard;
pub use favorites_grid::FavoritesGrid;
