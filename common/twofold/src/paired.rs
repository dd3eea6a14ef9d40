// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::probe;

#[cfg(any(test, feature = "generator"))]
use bolero_generator::{Driver, TypeGenerator};

#[cfg(test)]
mod tests;

/// Two independent optional values that are only acted on when both are present.
///
/// No relationship between the two sides is enforced. Every combinator consumes `self`;
/// call [`as_ref`](Self::as_ref) first to operate on borrowed values instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PairedOptional<T, S> {
    left: Option<T>,
    right: Option<S>,
}

impl<T, S> Default for PairedOptional<T, S> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, S> PairedOptional<T, S> {
    /// Wraps two existing optionals as-is
    #[inline]
    pub const fn new(left: Option<T>, right: Option<S>) -> Self {
        Self { left, right }
    }

    /// Creates a pair from values that may or may not be present
    ///
    /// Either side accepts a bare value or an `Option`; `None` becomes an absent side.
    ///
    /// ```
    /// use twofold::PairedOptional;
    ///
    /// let pair = PairedOptional::<u8, &str>::of_nullable(1, None::<&str>);
    /// assert!(!pair.is_present());
    /// ```
    #[inline]
    pub fn of_nullable(left: impl Into<Option<T>>, right: impl Into<Option<S>>) -> Self {
        Self::new(left.into(), right.into())
    }

    /// Returns a pair with both sides absent
    #[inline]
    pub const fn empty() -> Self {
        Self::new(None, None)
    }

    /// Returns `true` if both sides are present
    #[inline]
    pub const fn is_present(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    #[inline]
    pub fn left(&self) -> Option<&T> {
        self.left.as_ref()
    }

    #[inline]
    pub fn right(&self) -> Option<&S> {
        self.right.as_ref()
    }

    #[inline]
    pub fn as_ref(&self) -> PairedOptional<&T, &S> {
        PairedOptional::new(self.left.as_ref(), self.right.as_ref())
    }

    /// Returns both values if both are present
    #[inline]
    pub fn into_pair(self) -> Option<(T, S)> {
        match (self.left, self.right) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }

    /// Calls `f` with both values if both are present
    #[inline]
    pub fn if_present<F: FnOnce(T, S)>(self, f: F) {
        if let Some((left, right)) = self.into_pair() {
            f(left, right)
        }
    }

    /// Calls `f` with both values if both are present, otherwise calls `otherwise`
    ///
    /// Exactly one of the two callbacks is invoked.
    #[inline]
    pub fn if_present_or_else<F: FnOnce(T, S), E: FnOnce()>(self, f: F, otherwise: E) {
        match self.into_pair() {
            Some((left, right)) => f(left, right),
            None => otherwise(),
        }
    }

    /// Applies `f` to both values if both are present
    ///
    /// `f` is not invoked when either side is absent. Use [`flat_map`](Self::flat_map) when
    /// the mapping itself may produce nothing.
    ///
    /// ```
    /// use twofold::PairedOptional;
    ///
    /// let len = PairedOptional::<usize, &str>::of_nullable(5, "x").map(|n, s| n + s.len());
    /// assert_eq!(len, Some(6));
    /// ```
    #[inline]
    pub fn map<X, F: FnOnce(T, S) -> X>(self, f: F) -> Option<X> {
        self.into_pair().map(|(left, right)| f(left, right))
    }

    /// Returns the result of `f` if both values are present, without wrapping it again
    #[inline]
    pub fn flat_map<X, F: FnOnce(T, S) -> Option<X>>(self, f: F) -> Option<X> {
        self.into_pair().and_then(|(left, right)| f(left, right))
    }

    /// Keeps the pair if it is present and `predicate` holds, otherwise returns an empty pair
    ///
    /// `predicate` is never invoked on a pair that is not present.
    #[inline]
    pub fn filter<P: FnOnce(&T, &S) -> bool>(self, predicate: P) -> Self {
        let keep = match (&self.left, &self.right) {
            (Some(left), Some(right)) => predicate(left, right),
            _ => false,
        };

        if keep {
            self
        } else {
            probe::on_filter_rejected(self.is_present());
            Self::empty()
        }
    }
}

impl<T, S> From<(Option<T>, Option<S>)> for PairedOptional<T, S> {
    #[inline]
    fn from((left, right): (Option<T>, Option<S>)) -> Self {
        Self::new(left, right)
    }
}

impl<T, S> From<Option<(T, S)>> for PairedOptional<T, S> {
    #[inline]
    fn from(pair: Option<(T, S)>) -> Self {
        match pair {
            Some((left, right)) => Self::new(Some(left), Some(right)),
            None => Self::empty(),
        }
    }
}

impl<T, S> From<PairedOptional<T, S>> for Option<(T, S)> {
    #[inline]
    fn from(pair: PairedOptional<T, S>) -> Self {
        pair.into_pair()
    }
}

#[cfg(any(test, feature = "generator"))]
impl<T: TypeGenerator, S: TypeGenerator> TypeGenerator for PairedOptional<T, S> {
    fn generate<D: Driver>(driver: &mut D) -> Option<Self> {
        let (left, right) = <(Option<T>, Option<S>)>::generate(driver)?;
        Some(Self::new(left, right))
    }
}
