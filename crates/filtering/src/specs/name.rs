//! Exact-match specification on item name.

use crate::traits::Specification;
use catalog::Item;

/// Accepts items whose name equals the given string (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSpecification {
    name: String,
}

impl NameSpecification {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Specification<Item> for NameSpecification {
    fn is_satisfied(&self, item: &Item) -> bool {
        item.name == self.name
    }

    fn describe(&self) -> String {
        if is_bare_word(&self.name) {
            format!("name={}", self.name)
        } else {
            let escaped = self.name.replace('\\', "\\\\").replace('"', "\\\"");
            format!("name=\"{escaped}\"")
        }
    }
}

/// Names that can be written unquoted in a filter expression.
fn is_bare_word(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        && !name.eq_ignore_ascii_case("and")
        && !name.eq_ignore_ascii_case("or")
}
