//! Error types for the catalog crate.
//!
//! Covers the two ways building a catalog can go wrong: reading a dataset
//! file, and turning raw attribute text into a typed value.

use thiserror::Error;

/// Errors that can occur while parsing attribute values or loading a dataset
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading the dataset file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Dataset file is not a JSON array of items
    #[error("Invalid dataset JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// An attribute had a value outside its enumeration
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Item at the given position has a blank name
    #[error("Item {index} has an empty name")]
    EmptyName { index: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
