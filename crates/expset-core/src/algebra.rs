//! Set algebra over exponent sets.
//!
//! - `union`: exponents add
//! - `subtract`: exponents subtract
//! - `intersect`: elements present on both sides, smaller exponent kept
//! - `raise`: every exponent multiplied by a scalar
//!
//! Every operation produces a new canonical set; entries that cancel to zero
//! are dropped. The operator forms `a + b`, `a - b`, `a & b` and `-a` are
//! shorthands for `union`, `subtract`, `intersect` and `raise(-1)`.

use crate::exponent_set::{Exponent, ExponentSet};
use std::ops::{Add, AddAssign, BitAnd, Neg, Sub, SubAssign};

impl<T: Ord + Clone> ExponentSet<T> {
    /// Sum exponents over the elements of both sets.
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.union_assign(other);
        result
    }

    /// Subtract `other`'s exponents from this set's exponents.
    pub fn subtract(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.subtract_assign(other);
        result
    }

    /// Elements present in both sets, each with the smaller of its two exponents.
    pub fn intersect(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for (element, exponent) in self.iter() {
            if let Some(theirs) = other.get(element) {
                result.adjust(element.clone(), exponent.min(theirs));
            }
        }
        result
    }

    /// Multiply every exponent by `n`. Raising to 0 yields the empty set.
    pub fn raise(&self, n: Exponent) -> Self {
        let mut result = Self::new();
        if n == 0 {
            return result;
        }
        for (element, exponent) in self.iter() {
            result.adjust(element.clone(), exponent.saturating_mul(n));
        }
        result
    }

    /// In-place [`ExponentSet::union`].
    pub fn union_assign(&mut self, other: &Self) {
        for (element, exponent) in other.iter() {
            self.adjust(element.clone(), exponent);
        }
    }

    /// In-place [`ExponentSet::subtract`].
    pub fn subtract_assign(&mut self, other: &Self) {
        for (element, exponent) in other.iter() {
            self.retract(element.clone(), exponent);
        }
    }
}

impl<T: Ord + Clone> Add for &ExponentSet<T> {
    type Output = ExponentSet<T>;

    fn add(self, rhs: Self) -> ExponentSet<T> {
        self.union(rhs)
    }
}

impl<T: Ord + Clone> Add for ExponentSet<T> {
    type Output = ExponentSet<T>;

    fn add(mut self, rhs: Self) -> ExponentSet<T> {
        self.union_assign(&rhs);
        self
    }
}

impl<T: Ord + Clone> AddAssign<&ExponentSet<T>> for ExponentSet<T> {
    fn add_assign(&mut self, rhs: &ExponentSet<T>) {
        self.union_assign(rhs);
    }
}

impl<T: Ord + Clone> Sub for &ExponentSet<T> {
    type Output = ExponentSet<T>;

    fn sub(self, rhs: Self) -> ExponentSet<T> {
        self.subtract(rhs)
    }
}

impl<T: Ord + Clone> Sub for ExponentSet<T> {
    type Output = ExponentSet<T>;

    fn sub(mut self, rhs: Self) -> ExponentSet<T> {
        self.subtract_assign(&rhs);
        self
    }
}

impl<T: Ord + Clone> SubAssign<&ExponentSet<T>> for ExponentSet<T> {
    fn sub_assign(&mut self, rhs: &ExponentSet<T>) {
        self.subtract_assign(rhs);
    }
}

impl<T: Ord + Clone> BitAnd for &ExponentSet<T> {
    type Output = ExponentSet<T>;

    fn bitand(self, rhs: Self) -> ExponentSet<T> {
        self.intersect(rhs)
    }
}

impl<T: Ord + Clone> Neg for &ExponentSet<T> {
    type Output = ExponentSet<T>;

    fn neg(self) -> ExponentSet<T> {
        self.raise(-1)
    }
}

impl<T: Ord + Clone> Neg for ExponentSet<T> {
    type Output = ExponentSet<T>;

    fn neg(self) -> ExponentSet<T> {
        self.raise(-1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(s: &str) -> ExponentSet<char> {
        ExponentSet::from_sequence(s.chars())
    }

    #[test]
    fn test_union_adds_exponents() {
        assert_eq!(set("aaabd").union(&set("abbb")), set("aaaabbbbd"));
    }

    #[test]
    fn test_union_cancels_to_nothing() {
        let a: ExponentSet<char> = ExponentSet::from_mapping([('a', 2), ('b', 1)]);
        let b: ExponentSet<char> = ExponentSet::from_mapping([('a', -2)]);

        let result = a.union(&b);
        assert!(!result.contains_leaf(&'a'));
        assert_eq!(result, set("b"));
    }

    #[test]
    fn test_subtract_goes_negative() {
        let expected = ExponentSet::from_mapping([('a', 2), ('b', -2), ('d', 1)]);
        assert_eq!(set("aaabcd").subtract(&set("abbbc")), expected);
    }

    #[test]
    fn test_subtract_self_is_empty() {
        let a = set("aabccc");
        assert!(a.subtract(&a).is_empty());
    }

    #[test]
    fn test_subtract_at_lower_bound() {
        let a: ExponentSet<char> = ExponentSet::from_mapping([('k', Exponent::MIN), ('j', 4)]);
        assert!(a.subtract(&a).is_empty());

        let minus_one: ExponentSet<char> = ExponentSet::from_mapping([('k', -1)]);
        let floor: ExponentSet<char> = ExponentSet::from_mapping([('k', Exponent::MIN)]);
        assert_eq!(minus_one.subtract(&floor).exponent_of_leaf(&'k'), Exponent::MAX);
        assert_eq!(ExponentSet::new().subtract(&floor).exponent_of_leaf(&'k'), Exponent::MAX);
        assert_eq!(floor.subtract(&minus_one).exponent_of_leaf(&'k'), Exponent::MIN + 1);
    }

    #[test]
    fn test_raise_at_lower_bound() {
        let floor: ExponentSet<char> = ExponentSet::from_mapping([('k', Exponent::MIN)]);

        assert_eq!(floor.raise(-1).exponent_of_leaf(&'k'), Exponent::MAX);
        assert_eq!((-&floor).exponent_of_leaf(&'k'), Exponent::MAX);
        assert_eq!(floor.raise(1), floor);
        assert!(floor.raise(0).is_empty());
    }

    #[test]
    fn test_intersect_keeps_shared_minimum() {
        assert_eq!(set("aaabcd").intersect(&set("abbbc")), set("abc"));
    }

    #[test]
    fn test_intersect_with_negative_exponents() {
        let a: ExponentSet<char> = ExponentSet::from_mapping([('a', -3), ('b', 2)]);
        let b: ExponentSet<char> = ExponentSet::from_mapping([('a', 1), ('c', 4)]);

        assert_eq!(a.intersect(&b), ExponentSet::from_mapping([('a', -3)]));
    }

    #[test]
    fn test_raise_scales_exponents() {
        assert_eq!(set("aab").raise(2), set("aaaabb"));
        assert_eq!(
            set("aab").raise(-1),
            ExponentSet::from_mapping([('a', -2), ('b', -1)])
        );
        assert!(set("aab").raise(0).is_empty());
    }

    #[test]
    fn test_operators_match_methods() {
        let a = set("aaabd");
        let b = set("abbb");

        assert_eq!(&a + &b, a.union(&b));
        assert_eq!(&a - &b, a.subtract(&b));
        assert_eq!(&a & &b, a.intersect(&b));
        assert_eq!(-&a, a.raise(-1));
        assert_eq!(a.clone() + b.clone(), a.union(&b));
        assert_eq!(a.clone() - b.clone(), a.subtract(&b));

        let mut c = a.clone();
        c += &b;
        c -= &b;
        assert_eq!(c, a);
        assert_eq!(-a.clone(), a.raise(-1));
    }
}
