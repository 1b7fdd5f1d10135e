//! Core traits for specification-based filtering.
//!
//! A [`Specification`] is a pure predicate over a single item. A [`Filter`]
//! walks a collection and keeps the items a specification accepts. New
//! criteria are added by implementing `Specification`; the filter itself
//! never changes.

/// A composable predicate over items of type `T`.
///
/// ## Design Note
/// - `Send + Sync` allows specifications to be shared across threads
/// - Implementations must be side-effect free, so combinations are free
///   to short-circuit
pub trait Specification<T>: Send + Sync {
    /// Returns true if `item` meets this specification.
    fn is_satisfied(&self, item: &T) -> bool;

    /// A readable expression for this specification (for logging/debugging)
    fn describe(&self) -> String;
}

impl<T, S> Specification<T> for Box<S>
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Selects the items of a collection that satisfy a specification.
pub trait Filter<T> {
    /// Apply `spec` to each of `items`.
    ///
    /// # Returns
    /// The matching items, in input order. The input is left untouched.
    fn filter<'a>(&self, items: &'a [T], spec: &dyn Specification<T>) -> Vec<&'a T>;
}
