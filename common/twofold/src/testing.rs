// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Helpers for asserting which callbacks a combinator invoked.

use core::cell::Cell;

/// Counts the invocations of the callbacks handed to a combinator
#[derive(Debug, Default)]
pub struct Tally {
    left: Cell<usize>,
    right: Cell<usize>,
    otherwise: Cell<usize>,
}

impl Tally {
    #[inline]
    pub fn on_left(&self) {
        self.left.set(self.left.get() + 1);
    }

    #[inline]
    pub fn on_right(&self) {
        self.right.set(self.right.get() + 1);
    }

    #[inline]
    pub fn on_otherwise(&self) {
        self.otherwise.set(self.otherwise.get() + 1);
    }

    /// Returns the `(left, right, otherwise)` invocation counts
    #[inline]
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.left.get(), self.right.get(), self.otherwise.get())
    }

    /// Returns the total number of invocations across all callbacks
    #[inline]
    pub fn total(&self) -> usize {
        let (left, right, otherwise) = self.counts();
        left + right + otherwise
    }
}

#[macro_export]
macro_rules! assert_tally {
    ($tally:expr, left: $left:expr, right: $right:expr, otherwise: $otherwise:expr $(,)?) => {
        assert_eq!(
            $tally.counts(),
            ($left, $right, $otherwise),
            "unexpected (left, right, otherwise) callback counts"
        )
    };
}
