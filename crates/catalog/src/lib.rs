//! # Catalog Crate
//!
//! Item data model for the specification filter.
//!
//! ## Main Components
//!
//! - **types**: `Item` and its categorical attributes (`Color`, `Size`)
//! - **loader**: the built-in sample collection and JSON dataset loading
//! - **error**: Error types for parsing and loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{load_items, sample_items};
//! use std::path::Path;
//!
//! let items = sample_items();
//! let more = load_items(Path::new("items.json"))?;
//! ```

pub mod error;
pub mod loader;
pub mod types;

pub use error::{CatalogError, Result};
pub use loader::{load_items, parse_items, sample_items};
pub use types::{Color, Item, Size};
