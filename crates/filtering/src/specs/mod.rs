//! Specification implementations.
//!
//! Attribute specifications test one field of an item; combinations join
//! any two specifications with AND/OR.

pub mod color;
pub mod combination;
pub mod name;
pub mod size;

// Re-export for convenience
pub use color::ColorSpecification;
pub use combination::{CombinationSpecification, Operator};
pub use name::NameSpecification;
pub use size::SizeSpecification;
