//! Attribute-equality specification on item size.

use crate::traits::Specification;
use catalog::{Item, Size};

/// Accepts items of exactly one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Item> for SizeSpecification {
    fn is_satisfied(&self, item: &Item) -> bool {
        item.size == self.size
    }

    fn describe(&self) -> String {
        format!("size={}", self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Color;

    #[test]
    fn test_size_specification() {
        let spec = SizeSpecification::new(Size::Huge);

        assert!(spec.is_satisfied(&Item::new("Truck", Color::White, Size::Huge)));
        assert!(!spec.is_satisfied(&Item::new("Tree", Color::Green, Size::Large)));
        assert_eq!(spec.describe(), "size=huge");
    }
}
