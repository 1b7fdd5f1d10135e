//! Specification-based filtering of item collections.
//!
//! This crate provides:
//! - Specification trait and implementations (color, size, name, AND/OR)
//! - SpecFilter for selecting the items a specification accepts
//! - SpecPipeline for applying several specifications in turn
//! - A parser for textual filter expressions
//!
//! ## Architecture
//! Criteria live in specifications, not in the filter. Adding a new
//! criterion means adding a new `Specification` implementation; the filter
//! and every existing specification stay untouched. Combinations own their
//! children, so arbitrary AND/OR trees can be built and evaluated.
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{sample_items, Color, Size};
//! use filtering::specs::*;
//! use filtering::{Filter, SpecFilter};
//!
//! let items = sample_items();
//! let big_white = CombinationSpecification::and(
//!     ColorSpecification::new(Color::White),
//!     SizeSpecification::new(Size::Huge),
//! );
//! let matches = SpecFilter.filter(&items, &big_white);
//!
//! let parsed = filtering::parse_specification("color=green OR size=huge")?;
//! let matches = SpecFilter.filter(&items, parsed.as_ref());
//! ```

pub mod error;
pub mod parser;
pub mod spec_filter;
pub mod spec_pipeline;
pub mod specs;
pub mod traits;

// Re-export main types
pub use error::{Result, SpecError};
pub use parser::{MAX_NESTING, parse_specification};
pub use spec_filter::SpecFilter;
pub use spec_pipeline::SpecPipeline;
pub use traits::{Filter, Specification};
