//! Exponent-wise comparison of exponent sets.
//!
//! Two sets are only comparable when they hold exactly the same elements.
//! In that case a predicate is applied to each element's pair of exponents
//! and the results are combined with AND. Sets with different elements are
//! incomparable: [`ExponentSet::compare_with`] reports `None`, and the named
//! predicates report `false`.
//!
//! This is deliberately narrower than multiset inclusion. `{a: 1}` is not a
//! subset of `{a: 1, b: 1}` here, because the element sets differ.

use crate::exponent_set::{Exponent, ExponentSet};

impl<T: Ord + Clone> ExponentSet<T> {
    /// True if both sets hold exactly the same elements.
    pub fn same_elements(&self, other: &Self) -> bool {
        self.len() == other.len() && self.elements().eq(other.elements())
    }

    /// Apply `predicate(self_exp, other_exp)` to every shared element.
    ///
    /// Returns `None` if the element sets differ, otherwise `Some` of the
    /// conjunction. Two empty sets compare as `Some(true)`.
    pub fn compare_with<F>(&self, other: &Self, mut predicate: F) -> Option<bool>
    where
        F: FnMut(Exponent, Exponent) -> bool,
    {
        if !self.same_elements(other) {
            return None;
        }
        Some(
            self.exponents()
                .zip(other.exponents())
                .all(|(ours, theirs)| predicate(ours, theirs)),
        )
    }

    /// Every exponent strictly greater than its counterpart.
    pub fn proper_superset(&self, other: &Self) -> bool {
        self.compare_with(other, |a, b| a > b).unwrap_or(false)
    }

    /// Every exponent greater than or equal to its counterpart.
    pub fn superset(&self, other: &Self) -> bool {
        self.compare_with(other, |a, b| a >= b).unwrap_or(false)
    }

    /// Every exponent strictly less than its counterpart.
    pub fn proper_subset(&self, other: &Self) -> bool {
        self.compare_with(other, |a, b| a < b).unwrap_or(false)
    }

    /// Every exponent less than or equal to its counterpart.
    pub fn subset(&self, other: &Self) -> bool {
        self.compare_with(other, |a, b| a <= b).unwrap_or(false)
    }

    /// Same elements with the same exponents. Equivalent to `==`.
    pub fn equals(&self, other: &Self) -> bool {
        self.compare_with(other, |a, b| a == b).unwrap_or(false)
    }
}
