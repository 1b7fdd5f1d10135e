//! Boolean combination of two specifications.
//!
//! Children are evaluated left to right and the right child is skipped
//! whenever the left one already decides the result.

use crate::error::{Result, SpecError};
use crate::traits::Specification;
use std::fmt;

/// Boolean operator joining two specifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::And => f.write_str("AND"),
            Operator::Or => f.write_str("OR"),
        }
    }
}

/// Two owned child specifications joined by an [`Operator`].
pub struct CombinationSpecification<T> {
    left: Box<dyn Specification<T>>,
    right: Box<dyn Specification<T>>,
    operator: Operator,
}

impl<T> CombinationSpecification<T> {
    /// Create a combination from two possibly-missing children.
    ///
    /// # Returns
    /// * `Ok(CombinationSpecification)` - Both children are present
    /// * `Err(SpecError::InvalidArgument)` - Either child is `None`
    pub fn new(
        left: Option<Box<dyn Specification<T>>>,
        right: Option<Box<dyn Specification<T>>>,
        operator: Operator,
    ) -> Result<Self> {
        let left = left.ok_or_else(|| SpecError::InvalidArgument {
            reason: format!("{operator} combination is missing its left specification"),
        })?;
        let right = right.ok_or_else(|| SpecError::InvalidArgument {
            reason: format!("{operator} combination is missing its right specification"),
        })?;
        Ok(Self::from_boxed(left, right, operator))
    }

    /// Both `left` and `right` must hold.
    pub fn and(
        left: impl Specification<T> + 'static,
        right: impl Specification<T> + 'static,
    ) -> Self {
        Self::from_boxed(Box::new(left), Box::new(right), Operator::And)
    }

    /// At least one of `left` and `right` must hold.
    pub fn or(
        left: impl Specification<T> + 'static,
        right: impl Specification<T> + 'static,
    ) -> Self {
        Self::from_boxed(Box::new(left), Box::new(right), Operator::Or)
    }

    pub(crate) fn from_boxed(
        left: Box<dyn Specification<T>>,
        right: Box<dyn Specification<T>>,
        operator: Operator,
    ) -> Self {
        Self {
            left,
            right,
            operator,
        }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }
}

impl<T> Specification<T> for CombinationSpecification<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        match self.operator {
            Operator::And => self.left.is_satisfied(item) && self.right.is_satisfied(item),
            Operator::Or => self.left.is_satisfied(item) || self.right.is_satisfied(item),
        }
    }

    fn describe(&self) -> String {
        format!(
            "({} {} {})",
            self.left.describe(),
            self.operator,
            self.right.describe()
        )
    }
}
