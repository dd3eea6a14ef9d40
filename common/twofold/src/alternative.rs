// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::probe;
use core::fmt;

#[cfg(any(test, feature = "generator"))]
use bolero_generator::{Driver, TypeGenerator};


/// Returned by the value-returning [`Alternative`] combinators when neither side is populated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyAlternativeError;

impl fmt::Display for EmptyAlternativeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "no value present")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmptyAlternativeError {}

pub type Result<T, E = EmptyAlternativeError> = core::result::Result<T, E>;

/// A value that is either a left `T` or a right `S`
///
/// Neither side carries any meaning of its own, though by convention the left side holds the
/// error-like value. An instance never changes state after construction.
///
/// The nullable constructors produce [`Alternative::Empty`] when given `None`. The side-effect
/// combinators treat `Empty` as "no branch taken", while the combinators that must produce a value
/// return [`EmptyAlternativeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alternative<T, S> {
    Left(T),
    Right(S),
    Empty,
}

impl<T, S> Default for Alternative<T, S> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<T, S> Alternative<T, S> {
    #[inline]
    pub const fn of_left(value: T) -> Self {
        Self::Left(value)
    }

    #[inline]
    pub const fn of_right(value: S) -> Self {
        Self::Right(value)
    }

    /// Creates a left alternative, or an empty one if `value` is `None`
    #[inline]
    pub fn of_nullable_left(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Self::Left)
    }

    /// Creates a right alternative, or an empty one if `value` is `None`
    #[inline]
    pub fn of_nullable_right(value: Option<S>) -> Self {
        value.map_or(Self::Empty, Self::Right)
    }

    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` if neither side holds a value
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    pub fn left(&self) -> Option<&T> {
        match self {
            Self::Left(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn right(&self) -> Option<&S> {
        match self {
            Self::Right(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn into_left(self) -> Option<T> {
        match self {
            Self::Left(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn into_right(self) -> Option<S> {
        match self {
            Self::Right(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Alternative<&T, &S> {
        match self {
            Self::Left(value) => Alternative::Left(value),
            Self::Right(value) => Alternative::Right(value),
            Self::Empty => Alternative::Empty,
        }
    }

    /// Applies `f` to the left value, if any
    #[inline]
    pub fn map_left<Y, F: FnOnce(T) -> Y>(self, f: F) -> Option<Y> {
        self.into_left().map(f)
    }

    /// Applies `f` to the right value, if any
    #[inline]
    pub fn map_right<X, F: FnOnce(S) -> X>(self, f: F) -> Option<X> {
        self.into_right().map(f)
    }

    /// Applies the function for whichever side is populated and returns its result
    ///
    /// ```
    /// use twofold::Alternative;
    ///
    /// let len = Alternative::<u32, &str>::of_right("four")
    ///     .map_left_or_right(|n| n as usize, |s| s.len());
    /// assert_eq!(len, Ok(4));
    ///
    /// let empty = Alternative::<u32, &str>::of_nullable_left(None);
    /// assert!(empty.map_left_or_right(|n| n as usize, |s| s.len()).is_err());
    /// ```
    #[inline]
    pub fn map_left_or_right<X, L, R>(self, left: L, right: R) -> Result<X>
    where
        L: FnOnce(T) -> X,
        R: FnOnce(S) -> X,
    {
        match self {
            Self::Left(value) => Ok(left(value)),
            Self::Right(value) => Ok(right(value)),
            Self::Empty => Err(empty("map_left_or_right")),
        }
    }

    /// Transforms whichever side is populated, keeping the same side
    #[inline]
    pub fn map<X, Y, L, R>(self, left: L, right: R) -> Result<Alternative<X, Y>>
    where
        L: FnOnce(T) -> X,
        R: FnOnce(S) -> Y,
    {
        match self {
            Self::Left(value) => Ok(Alternative::Left(left(value))),
            Self::Right(value) => Ok(Alternative::Right(right(value))),
            Self::Empty => Err(empty("map")),
        }
    }

    /// Returns the alternative produced by the function for whichever side is populated
    #[inline]
    pub fn flat_map<X, Y, L, R>(self, left: L, right: R) -> Result<Alternative<X, Y>>
    where
        L: FnOnce(T) -> Alternative<X, Y>,
        R: FnOnce(S) -> Alternative<X, Y>,
    {
        match self {
            Self::Left(value) => Ok(left(value)),
            Self::Right(value) => Ok(right(value)),
            Self::Empty => Err(empty("flat_map")),
        }
    }

    #[inline]
    pub fn if_left<F: FnOnce(T)>(self, f: F) {
        if let Self::Left(value) = self {
            f(value)
        }
    }

    #[inline]
    pub fn if_right<F: FnOnce(S)>(self, f: F) {
        if let Self::Right(value) = self {
            f(value)
        }
    }

    /// Calls the function for whichever side is populated
    ///
    /// Nothing is called on an empty alternative.
    #[inline]
    pub fn if_left_or_right<L: FnOnce(T), R: FnOnce(S)>(self, left: L, right: R) {
        match self {
            Self::Left(value) => left(value),
            Self::Right(value) => right(value),
            Self::Empty => {}
        }
    }

    /// Converts the alternative into a `Result`, treating the left side as the error
    #[inline]
    pub fn into_result(self) -> Result<core::result::Result<S, T>> {
        self.map_left_or_right(Err, Ok)
    }
}

impl<T, S> From<core::result::Result<S, T>> for Alternative<T, S> {
    #[inline]
    fn from(result: core::result::Result<S, T>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(value) => Self::Left(value),
        }
    }
}

#[inline]
fn empty(combinator: &'static str) -> EmptyAlternativeError {
    probe::on_empty_alternative(combinator);
    EmptyAlternativeError
}

#[cfg(any(test, feature = "generator"))]
impl<T: TypeGenerator, S: TypeGenerator> TypeGenerator for Alternative<T, S> {
    fn generate<D: Driver>(driver: &mut D) -> Option<Self> {
        // the nullable constructors cover `Empty` along with the populated sides
        let value = match u8::generate(driver)? % 4 {
            0 => Self::of_nullable_left(Option::<T>::generate(driver)?),
            1 => Self::of_nullable_right(Option::<S>::generate(driver)?),
            2 => Self::Left(T::generate(driver)?),
            _ => Self::Right(S::generate(driver)?),
        };
        Some(value)
    }
}
