//! The default [`Filter`] implementation.

use crate::traits::{Filter, Specification};

/// Keeps every item a specification accepts, in input order.
///
/// ## Algorithm
/// A single linear pass. Each item is evaluated once, so the cost is
/// O(n * d) for n items and a specification tree of depth d.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpecFilter;

impl<T> Filter<T> for SpecFilter {
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T> {
        let filtered: Vec<&T> = items
            .iter()
            .filter(|item| spec.is_satisfied(item))
            .collect();
        tracing::debug!(
            "Filtered by {} (input count: {}, output count: {})",
            spec.describe(),
            items.len(),
            filtered.len()
        );
        filtered
    }
}
