//! Attribute-equality specification on item color.

use crate::traits::Specification;
use catalog::{Color, Item};

/// Accepts items of exactly one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Item> for ColorSpecification {
    fn is_satisfied(&self, item: &Item) -> bool {
        item.color == self.color
    }

    fn describe(&self) -> String {
        format!("color={}", self.color)
    }
}
