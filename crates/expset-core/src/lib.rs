//! # expset-core
//!
//! Multisets with signed integer exponents.
//!
//! An [`ExponentSet`] maps each element to a non-zero `i64` exponent. Elements
//! are either plain values ([`Element::Leaf`]) or other exponent sets
//! ([`Element::Nested`]), which makes hierarchical composition possible.
//!
//! This crate provides:
//! - Construction from explicit exponents or by tallying a sequence
//! - Union, subtraction, intersection and scalar exponentiation
//! - Compaction: flattening nested sets into their parent
//! - Exponent-wise comparison between sets with the same elements
//!
//! ## Example
//!
//! ```rust
//! use expset_core::{Element, ExponentSet};
//!
//! let inner: ExponentSet<char> = ExponentSet::from_mapping([('b', 2), ('c', 1)]);
//! let mut outer: ExponentSet<char> = ExponentSet::from_mapping([('a', 3), ('b', 2)]);
//! outer.add_n(Element::nested(inner), 2);
//!
//! assert!(outer.compactable());
//! assert_eq!(
//!     outer.compact(),
//!     ExponentSet::from_mapping([('a', 3), ('b', 6), ('c', 2)])
//! );
//! ```

mod algebra;
mod compaction;
mod element;
mod error;
mod exponent_set;
mod ordering;

pub use compaction::CompactionStats;
pub use element::Element;
pub use error::{ExponentSetError, Result};
pub use exponent_set::{Exponent, ExponentSet};
