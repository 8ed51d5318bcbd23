//! The exponent set value type.
//!
//! An `ExponentSet` maps elements to signed, non-zero exponents. It behaves
//! like a multiset whose multiplicities may go negative: adding an element
//! raises its exponent by one, removing it lowers it by one, and an entry
//! whose exponent reaches zero disappears.
//!
//! Canonical form is maintained by every operation: no entry is ever stored
//! with exponent 0, so two sets are equal exactly when they hold the same
//! elements with the same exponents.

use crate::element::Element;
use crate::error::{ExponentSetError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt::Debug;
use tracing::debug;

/// Signed multiplicity of an element.
pub type Exponent = i64;

/// A multiset with signed integer exponents over leaf values and nested sets.
///
/// The derived `Ord` is a structural order that lets sets be used as keys of
/// other sets. It is not the inclusion relation; see
/// [`ExponentSet::compare_with`] and the named predicates for that.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExponentSet<T: Ord + Clone> {
    /// Element -> exponent, never containing a zero exponent
    entries: BTreeMap<Element<T>, Exponent>,
}

impl<T: Ord + Clone> ExponentSet<T> {
    /// Create a new empty set
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Alias of [`ExponentSet::new`].
    pub fn empty() -> Self {
        Self::new()
    }

    /// Build a set from explicit element/exponent pairs.
    ///
    /// Pairs with exponent 0 are dropped. If an element appears more than
    /// once, the last pair wins, as with inserting into a map.
    pub fn from_mapping<I, E>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (E, Exponent)>,
        E: Into<Element<T>>,
    {
        let mut entries = BTreeMap::new();
        for (element, exponent) in mapping {
            entries.insert(element.into(), exponent);
        }
        entries.retain(|_, exponent| *exponent != 0);
        Self { entries }
    }

    /// Build a set from explicit pairs, rejecting any zero exponent.
    ///
    /// Duplicate elements follow the same last-wins rule as
    /// [`ExponentSet::from_mapping`]; a zero is rejected wherever it appears.
    pub fn try_from_mapping<I, E>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (E, Exponent)>,
        E: Into<Element<T>>,
        T: Debug,
    {
        let mut entries = BTreeMap::new();
        for (element, exponent) in mapping {
            let element = element.into();
            if exponent == 0 {
                debug!(?element, "rejecting zero exponent");
                return Err(ExponentSetError::InvalidExponent {
                    element: format!("{:?}", element),
                });
            }
            entries.insert(element, exponent);
        }
        Ok(Self { entries })
    }

    /// Tally a sequence: each occurrence adds one to that element's exponent.
    pub fn from_sequence<I, E>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element<T>>,
    {
        let mut set = Self::new();
        for element in elements {
            set.add(element);
        }
        set
    }

    /// Exponent of `element`, or 0 if it is absent.
    pub fn exponent_of(&self, element: &Element<T>) -> Exponent {
        self.entries.get(element).copied().unwrap_or(0)
    }

    /// Exponent of the leaf `value`, or 0 if it is absent.
    pub fn exponent_of_leaf(&self, value: &T) -> Exponent {
        self.exponent_of(&Element::Leaf(value.clone()))
    }

    /// Stored exponent of `element`, `None` if absent.
    pub fn get(&self, element: &Element<T>) -> Option<Exponent> {
        self.entries.get(element).copied()
    }

    pub fn contains(&self, element: &Element<T>) -> bool {
        self.entries.contains_key(element)
    }

    pub fn contains_leaf(&self, value: &T) -> bool {
        self.contains(&Element::Leaf(value.clone()))
    }

    /// Increment the exponent of `element` by one.
    pub fn add(&mut self, element: impl Into<Element<T>>) -> &mut Self {
        self.adjust(element.into(), 1);
        self
    }

    /// Decrement the exponent of `element` by one.
    ///
    /// An absent element ends up with exponent -1.
    pub fn remove(&mut self, element: impl Into<Element<T>>) -> &mut Self {
        self.adjust(element.into(), -1);
        self
    }

    /// Increment the exponent of `element` by `count`.
    pub fn add_n(&mut self, element: impl Into<Element<T>>, count: Exponent) -> &mut Self {
        self.adjust(element.into(), count);
        self
    }

    /// Decrement the exponent of `element` by `count`.
    pub fn remove_n(&mut self, element: impl Into<Element<T>>, count: Exponent) -> &mut Self {
        self.retract(element.into(), count);
        self
    }

    /// Shift the exponent of `element` up by `delta`, dropping it at zero.
    pub(crate) fn adjust(&mut self, element: Element<T>, delta: Exponent) {
        if delta != 0 {
            self.apply(element, |exponent| exponent.saturating_add(delta));
        }
    }

    /// Shift the exponent of `element` down by `delta`, dropping it at zero.
    pub(crate) fn retract(&mut self, element: Element<T>, delta: Exponent) {
        if delta != 0 {
            self.apply(element, |exponent| exponent.saturating_sub(delta));
        }
    }

    /// Replace the exponent of `element` (0 if absent) with `f(exponent)`.
    fn apply<F>(&mut self, element: Element<T>, f: F)
    where
        F: FnOnce(Exponent) -> Exponent,
    {
        match self.entries.entry(element) {
            btree_map::Entry::Vacant(slot) => {
                let exponent = f(0);
                if exponent != 0 {
                    slot.insert(exponent);
                }
            }
            btree_map::Entry::Occupied(mut slot) => {
                let exponent = f(*slot.get());
                if exponent == 0 {
                    slot.remove();
                } else {
                    *slot.get_mut() = exponent;
                }
            }
        }
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending element order.
    pub fn iter(&self) -> impl Iterator<Item = (&Element<T>, Exponent)> {
        self.entries.iter().map(|(element, exponent)| (element, *exponent))
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element<T>> {
        self.entries.keys()
    }

    pub fn exponents(&self) -> impl Iterator<Item = Exponent> + '_ {
        self.entries.values().copied()
    }

    /// Sum of all exponents.
    pub fn degree(&self) -> Exponent {
        self.exponents().fold(0, Exponent::saturating_add)
    }

    /// Encode as JSON: a list of `[element, exponent]` pairs.
    pub fn to_json(&self) -> Result<String>
    where
        T: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a set previously produced by [`ExponentSet::to_json`].
    pub fn from_json(json: &str) -> Result<Self>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_str(json)?)
    }
}

impl<T: Ord + Clone> Default for ExponentSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone, E: Into<Element<T>>> FromIterator<E> for ExponentSet<T> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_sequence(iter)
    }
}

impl<T: Ord + Clone, E: Into<Element<T>>> Extend<E> for ExponentSet<T> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: Ord + Clone> IntoIterator for ExponentSet<T> {
    type Item = (Element<T>, Exponent);
    type IntoIter = btree_map::IntoIter<Element<T>, Exponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T: Ord + Clone> IntoIterator for &'a ExponentSet<T> {
    type Item = (&'a Element<T>, &'a Exponent);
    type IntoIter = btree_map::Iter<'a, Element<T>, Exponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Serialized as a sequence of pairs so that non-string keys, nested sets
// included, survive formats like JSON that only allow string map keys.
impl<T: Ord + Clone + Serialize> Serialize for ExponentSet<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let pairs: Vec<(&Element<T>, &Exponent)> = self.entries.iter().collect();
        pairs.serialize(serializer)
    }
}

impl<'de, T: Ord + Clone + Deserialize<'de>> Deserialize<'de> for ExponentSet<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = Vec::<(Element<T>, Exponent)>::deserialize(deserializer)?;
        let mut entries = BTreeMap::new();
        for (element, exponent) in pairs {
            if exponent == 0 {
                return Err(serde::de::Error::custom("exponent set entry with exponent 0"));
            }
            if entries.insert(element, exponent).is_some() {
                return Err(serde::de::Error::custom("duplicate element in exponent set"));
            }
        }
        Ok(Self { entries })
    }
}
