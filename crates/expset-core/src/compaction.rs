//! Flattening of nested exponent sets.
//!
//! A nested key `N` stored with exponent `n` stands for the contents of `N`
//! raised to `n`. Compaction replaces every such key by that expansion and
//! merges it into the parent with `union`. A nested set may itself hold
//! nested keys, so expansion repeats until no nested key is left.
//!
//! A set that contains itself, directly or through other sets, cannot be
//! built from owned values, so the loop always terminates.

use crate::element::Element;
use crate::exponent_set::ExponentSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Statistics from a compaction run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactionStats {
    /// Number of expansion passes performed (0 if nothing was nested).
    pub passes: usize,
    /// Total nested keys expanded across all passes.
    pub nested_expanded: usize,
}

impl<T: Ord + Clone> ExponentSet<T> {
    /// True if at least one key is itself an exponent set.
    pub fn compactable(&self) -> bool {
        self.elements().any(Element::is_nested)
    }

    /// Flatten all nested keys into leaf entries.
    pub fn compact(&self) -> Self {
        self.compact_with_stats().0
    }

    /// Flatten all nested keys, reporting how much work it took.
    pub fn compact_with_stats(&self) -> (Self, CompactionStats) {
        let mut stats = CompactionStats::default();
        let mut current = self.clone();

        while current.compactable() {
            stats.passes += 1;

            let mut flattened = ExponentSet::new();
            let mut expansions = Vec::new();
            for (element, exponent) in current {
                match element {
                    Element::Leaf(_) => flattened.adjust(element, exponent),
                    Element::Nested(inner) => expansions.push(inner.raise(exponent)),
                }
            }

            trace!(
                pass = stats.passes,
                expanded = expansions.len(),
                "expanding nested exponent sets"
            );
            stats.nested_expanded += expansions.len();

            for expansion in &expansions {
                flattened.union_assign(expansion);
            }
            current = flattened;
        }

        debug!(
            passes = stats.passes,
            nested_expanded = stats.nested_expanded,
            remaining = current.len(),
            "compaction complete"
        );
        (current, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaves(pairs: &[(char, i64)]) -> ExponentSet<char> {
        ExponentSet::from_mapping(pairs.iter().copied())
    }

    fn with_nested(pairs: &[(char, i64)], nested: ExponentSet<char>, n: i64) -> ExponentSet<char> {
        let mut set = leaves(pairs);
        set.add_n(Element::nested(nested), n);
        set
    }

    #[test]
    fn test_compactable_detects_nested_key() {
        let nested = with_nested(&[('a', 3), ('b', 2)], leaves(&[('c', 1)]), 1);
        assert!(nested.compactable());

        let flat = leaves(&[('a', 3), ('b', 2), ('c', 1)]);
        assert!(!flat.compactable());
    }

    #[test]
    fn test_compact_merges_inner_set() {
        let set = with_nested(&[('a', 3), ('b', 2)], leaves(&[('b', 2), ('c', 1)]), 1);
        assert_eq!(set.compact(), leaves(&[('a', 3), ('b', 4), ('c', 1)]));
    }

    #[test]
    fn test_compact_raises_inner_set() {
        let set = with_nested(&[('a', 3), ('b', 2)], leaves(&[('b', 2), ('c', 1)]), 2);
        assert_eq!(set.compact(), leaves(&[('a', 3), ('b', 6), ('c', 2)]));
    }

    #[test]
    fn test_compact_negative_exponent_cancels() {
        let set = with_nested(&[('a', 2), ('b', 1)], leaves(&[('a', 1)]), -2);
        assert_eq!(set.compact(), leaves(&[('b', 1)]));
    }

    #[test]
    fn test_compact_flattens_multiple_levels() {
        let innermost = leaves(&[('x', 1)]);
        let middle = with_nested(&[('y', 1)], innermost, 3);
        let outer = with_nested(&[('z', 1)], middle, 2);

        let (flat, stats) = outer.compact_with_stats();

        assert_eq!(flat, leaves(&[('x', 6), ('y', 2), ('z', 1)]));
        assert!(!flat.compactable());
        assert_eq!(stats.passes, 2);
        assert_eq!(stats.nested_expanded, 2);
    }

    #[test]
    fn test_compact_flat_set_is_noop() {
        let flat = leaves(&[('a', 1), ('b', -4)]);
        let (result, stats) = flat.compact_with_stats();

        assert_eq!(result, flat);
        assert_eq!(stats, CompactionStats::default());
    }
}
