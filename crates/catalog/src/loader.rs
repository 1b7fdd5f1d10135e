//! Loading item collections.
//!
//! Datasets are JSON arrays of items:
//! `[{"name": "Apple", "color": "green", "size": "small"}, ...]`.
//! When no file is given, callers fall back to [`sample_items`].

use crate::error::{CatalogError, Result};
use crate::types::{Color, Item, Size};
use std::fs;
use std::path::Path;

/// The built-in sample collection, in its canonical order.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("Apple", Color::Green, Size::Small),
        Item::new("Tree", Color::Green, Size::Large),
        Item::new("House", Color::White, Size::Huge),
        Item::new("Truck", Color::White, Size::Huge),
    ]
}

/// Parse a JSON dataset from a string.
///
/// Item order is preserved. Items whose name is blank are rejected.
pub fn parse_items(json: &str) -> Result<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    if let Some(index) = items.iter().position(|item| item.name.trim().is_empty()) {
        return Err(CatalogError::EmptyName { index });
    }
    Ok(items)
}

/// Read and parse a JSON dataset file.
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let content = fs::read_to_string(path)?;
    let items = parse_items(&content)?;
    tracing::info!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}
