//! The SpecPipeline applies several specifications in turn.
//!
//! This module provides the SpecPipeline struct that chains
//! specifications together using the builder pattern.

use crate::traits::Specification;

/// Chains multiple specifications into a processing pipeline.
///
/// Running the stages one after another keeps exactly the items that
/// satisfy all of them, so a pipeline behaves like the AND of its stages.
///
/// ## Usage
/// ```ignore
/// let pipeline = SpecPipeline::new()
///     .add_spec(ColorSpecification::new(Color::White))
///     .add_spec(SizeSpecification::new(Size::Huge));
///
/// let filtered = pipeline.apply(items);
/// ```
pub struct SpecPipeline<T> {
    specs: Vec<Box<dyn Specification<T>>>,
}

impl<T> SpecPipeline<T> {
    /// Create a new empty SpecPipeline.
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Add a stage to the pipeline (builder pattern).
    pub fn add_spec(mut self, spec: impl Specification<T> + 'static) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Apply all stages in sequence to the items.
    ///
    /// ## Algorithm
    /// 1. Start with the input items
    /// 2. For each stage in order:
    ///    a. Log the stage and input count
    ///    b. Keep the items the stage accepts
    ///    c. Log output count
    /// 3. Return the surviving items, still in input order
    pub fn apply(&self, items: Vec<T>) -> Vec<T> {
        let mut current = items;
        for spec in &self.specs {
            tracing::debug!(
                "Applying spec: {} (input count: {})",
                spec.describe(),
                current.len()
            );
            current.retain(|item| spec.is_satisfied(item));
            tracing::debug!(
                "Spec applied: {} (output count: {})",
                spec.describe(),
                current.len()
            );
        }
        current
    }
}

impl<T> Default for SpecPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
