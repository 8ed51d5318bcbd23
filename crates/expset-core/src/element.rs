//! Keys of an exponent set.
//!
//! An element is either an ordinary value (a leaf) or a whole exponent set
//! (nested). Nesting is what makes compaction necessary: a nested key stands
//! for its own contents raised to the exponent it is stored under.

use crate::exponent_set::ExponentSet;
use serde::{Deserialize, Serialize};

/// A key of an [`ExponentSet`].
///
/// Ordering and hashing are structural, so two nested sets with the same
/// entries are the same key regardless of how they were built.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element<T: Ord + Clone> {
    Leaf(T),
    Nested(ExponentSet<T>),
}

impl<T: Ord + Clone> Element<T> {
    pub fn leaf(value: T) -> Self {
        Element::Leaf(value)
    }

    pub fn nested(set: ExponentSet<T>) -> Self {
        Element::Nested(set)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Element::Leaf(_))
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, Element::Nested(_))
    }

    /// The leaf value, if this element is not a nested set.
    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Element::Leaf(value) => Some(value),
            Element::Nested(_) => None,
        }
    }

    /// The nested set, if this element is one.
    pub fn as_nested(&self) -> Option<&ExponentSet<T>> {
        match self {
            Element::Leaf(_) => None,
            Element::Nested(set) => Some(set),
        }
    }
}

impl<T: Ord + Clone> From<T> for Element<T> {
    fn from(value: T) -> Self {
        Element::Leaf(value)
    }
}
