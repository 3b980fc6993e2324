//! Donut Catalog
//!
//! The fixed menu shown on the page.

use crate::models::CatalogItem;

/// Grey 200x200 placeholder until real photos exist
const BLANK_IMG: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='200' height='200'%3E%3Crect width='100%25' height='100%25' fill='%23d4d4d4'/%3E%3C/svg%3E";

pub const DONUTS: &[CatalogItem] = &[
    CatalogItem { id: "d1", name: "Classic Glazed", img: BLANK_IMG },
    CatalogItem { id: "d2", name: "Strawberry Sprinkle", img: BLANK_IMG },
    CatalogItem { id: "d3", name: "Chocolate Frost", img: BLANK_IMG },
    CatalogItem { id: "d4", name: "Matcha Magic", img: BLANK_IMG },
    CatalogItem { id: "d5", name: "Coconut Dream", img: BLANK_IMG },
    CatalogItem { id: "d6", name: "Maple Bacon", img: BLANK_IMG },
    CatalogItem { id: "d7", name: "Old Fashioned", img: BLANK_IMG },
    CatalogItem { id: "d8", name: "Blueberry Cakie", img: BLANK_IMG },
    CatalogItem { id: "d9", name: "Vanilla Bean", img: BLANK_IMG },
];
