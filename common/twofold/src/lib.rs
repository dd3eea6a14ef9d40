// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Two small value types for working with pairs of optional values.
//!
//! * [`PairedOptional`] couples two independent optionals and only acts when both are present.
//! * [`Alternative`] holds a left or a right value and dispatches on whichever side is populated.

#[macro_use]
pub mod probe;

pub mod alternative;
pub mod paired;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use alternative::{Alternative, EmptyAlternativeError};
pub use paired::PairedOptional;
