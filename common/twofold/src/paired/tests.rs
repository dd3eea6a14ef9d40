// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use super::*;
use crate::testing::Tally;
use bolero::check;

type Pair = PairedOptional<u8, u16>;

#[test]
fn presence_requires_both_sides() {
    assert!(Pair::new(Some(1), Some(2)).is_present());
    assert!(!Pair::new(Some(1), None).is_present());
    assert!(!Pair::new(None, Some(2)).is_present());
    assert!(!Pair::new(None, None).is_present());
}

#[test]
fn of_nullable_test() {
    let pair = Pair::of_nullable(1, 2);
    assert_eq!(pair, Pair::new(Some(1), Some(2)));

    let pair = Pair::of_nullable(None::<u8>, 2);
    assert_eq!(pair.left(), None);
    assert_eq!(pair.right(), Some(&2));
    assert!(!pair.is_present());
}

#[test]
fn empty_never_invokes_callbacks() {
    let tally = Tally::default();

    Pair::empty().if_present(|_, _| tally.on_left());
    crate::assert_tally!(tally, left: 0, right: 0, otherwise: 0);

    Pair::empty().if_present_or_else(|_, _| tally.on_left(), || tally.on_otherwise());
    crate::assert_tally!(tally, left: 0, right: 0, otherwise: 1);

    assert_eq!(Pair::empty().map(|_, _| tally.on_left()), None);
    assert_eq!(Pair::empty().flat_map(|_, _| Some(tally.on_left())), None);
    crate::assert_tally!(tally, left: 0, right: 0, otherwise: 1);

    assert_eq!(Pair::default(), Pair::empty());
}

#[test]
fn if_present_passes_both_values() {
    let mut seen = None;
    Pair::of_nullable(3, 4).if_present(|left, right| seen = Some((left, right)));
    assert_eq!(seen, Some((3, 4)));
}

#[test]
fn map_scenario_test() {
    let pair = PairedOptional::<usize, &str>::of_nullable(5, "x");
    assert_eq!(pair.map(|n, s| n + s.len()), Some(6));
}

#[test]
fn flat_map_collapses_absent_results() {
    let pair = Pair::of_nullable(1, 2);
    assert_eq!(pair.flat_map(|_, _| None::<u32>), None);
    assert_eq!(
        pair.flat_map(|left, right| u16::from(left).checked_add(right)),
        Some(3)
    );
}

#[test]
fn filter_test() {
    let pair = Pair::of_nullable(1, 2);
    assert_eq!(pair.filter(|left, right| u16::from(*left) < *right), pair);
    assert_eq!(pair.filter(|left, right| u16::from(*left) > *right), Pair::empty());

    let tally = Tally::default();
    let half = Pair::new(Some(1), None);
    assert_eq!(
        half.filter(|_, _| {
            tally.on_left();
            true
        }),
        Pair::empty()
    );
    assert_eq!(tally.total(), 0);
}

#[test]
fn borrowed_pair_test() {
    let pair = PairedOptional::new(Some(String::from("a")), Some(vec![1u8, 2]));
    let len = pair.as_ref().map(|name, bytes| name.len() + bytes.len());
    assert_eq!(len, Some(3));

    // the original pair is still usable after operating on borrows
    assert_eq!(pair.into_pair(), Some((String::from("a"), vec![1, 2])));
}

#[test]
fn conversions_test() {
    let pair: Pair = (Some(1), None).into();
    assert_eq!(pair, Pair::new(Some(1), None));

    let pair: Pair = Some((1, 2)).into();
    let values: Option<(u8, u16)> = pair.into();
    assert_eq!(values, Some((1, 2)));

    let pair = Pair::from(None::<(u8, u16)>);
    assert_eq!(pair, Pair::empty());
}

#[test]
#[cfg_attr(miri, ignore)]
fn presence_fuzz_test() {
    check!()
        .with_type::<(Option<u8>, Option<u16>)>()
        .cloned()
        .for_each(|(left, right)| {
            let pair = Pair::new(left, right);
            assert_eq!(pair.is_present(), left.is_some() && right.is_some());
            assert_eq!(pair.into_pair().is_some(), pair.is_present());
        });
}

#[test]
#[cfg_attr(miri, ignore)]
fn combinators_fuzz_test() {
    check!()
        .with_type::<(Pair, u8)>()
        .cloned()
        .for_each(|(pair, threshold)| {
            let tally = Tally::default();
            pair.if_present_or_else(|_, _| tally.on_left(), || tally.on_otherwise());
            assert_eq!(tally.total(), 1, "exactly one callback must run");
            assert_eq!(tally.counts().0 == 1, pair.is_present());

            let expected = match (pair.left(), pair.right()) {
                (Some(left), Some(right)) => Some(u32::from(*left) + u32::from(*right)),
                _ => None,
            };
            assert_eq!(
                pair.map(|left, right| u32::from(left) + u32::from(right)),
                expected
            );

            let filtered = pair.filter(|left, _| *left >= threshold);
            if pair.is_present() && pair.left() >= Some(&threshold) {
                assert_eq!(filtered, pair);
            } else {
                assert_eq!(filtered, Pair::empty());
            }
        });
}
