// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Trace points emitted by the combinators.
//!
//! Probes compile to nothing unless the `probe-tracing` feature is enabled, in which case each
//! one emits a `tracing` event at the `TRACE` level, targeted at `twofold::probe::<name>`.

#[doc(hidden)]
#[macro_export]
macro_rules! __probe_define__ {
    (extern "probe" {
        $(
            $(
                #[doc = $doc:tt]
            )*
            $vis:vis fn $fun:ident($($arg:ident: $arg_t:ty),* $(,)?);
        )*
    }) => {
        $(
            $(
                #[doc = $doc]
            )*
            #[inline(always)]
            $vis fn $fun($($arg: $arg_t),*) {
                $crate::probe::__trace!(
                    name: stringify!($fun),
                    target: concat!(module_path!(), "::", stringify!($fun)),
                    $(
                        $arg = ?$arg,
                    )*
                );

                // keep the arguments used when tracing is compiled out
                let _ = ($($arg,)*);
            }
        )*
    }
}

#[doc(inline)]
pub use __probe_define__ as define;

#[cfg(feature = "probe-tracing")]
#[doc(hidden)]
pub use tracing::trace as __trace;

#[cfg(not(feature = "probe-tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __trace_impl__ {
    ($($fmt:tt)*) => {};
}

#[cfg(not(feature = "probe-tracing"))]
#[doc(hidden)]
pub use __trace_impl__ as __trace;

define!(extern "probe" {
    /// Emitted when a value-returning `Alternative` combinator finds neither side populated
    pub fn on_empty_alternative(combinator: &'static str);

    /// Emitted when `PairedOptional::filter` returns an empty pair
    ///
    /// `was_present` distinguishes a pair rejected by the predicate from one that was already empty.
    pub fn on_filter_rejected(was_present: bool);
});
