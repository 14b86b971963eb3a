// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Scenario tests for the derived views of a set family.

use std::collections::HashSet;
use venn_model::{ModelError, SetFamily, SubsetKey};

fn set(elements: &[i32]) -> HashSet<i32> {
    elements.iter().copied().collect()
}

#[test]
fn test_binary_family() {
    // A = {1,2,3}, B = {2,3,4}
    let family = SetFamily::new(vec![set(&[1, 2, 3]), set(&[2, 3, 4])]).unwrap();

    assert_eq!(family.union(), &set(&[1, 2, 3, 4]));
    assert_eq!(family.intersection(), &set(&[2, 3]));
    assert_eq!(family.exclusive_to(0, &[]).unwrap(), &set(&[1]));
    assert_eq!(family.exclusive_to(1, &[]).unwrap(), &set(&[4]));
    assert_eq!(family.exclusive_to(0, &[1]).unwrap(), &set(&[2, 3]));
}

#[test]
fn test_ternary_family() {
    // A = {1,2}, B = {2,3}, C = {3,1}: pairwise overlaps, nothing common.
    let family =
        SetFamily::new(vec![set(&[1, 2]), set(&[2, 3]), set(&[3, 1])]).unwrap();

    assert_eq!(family.regions().count(), 7);
    assert!(family.intersection().is_empty());
    assert!(family.exclusive_to(0, &[1, 2]).unwrap().is_empty());

    // Each element sits in exactly one pairwise region.
    assert_eq!(family.exclusive_to(0, &[1]).unwrap(), &set(&[2]));
    assert_eq!(family.exclusive_to(1, &[2]).unwrap(), &set(&[3]));
    assert_eq!(family.exclusive_to(0, &[2]).unwrap(), &set(&[1]));

    // No element is exclusive to a single set.
    for index in 0..3 {
        assert!(family.exclusive_to(index, &[]).unwrap().is_empty());
    }

    // Every region is empty or a singleton here.
    for (_, region) in family.regions() {
        assert!(region.len() <= 1);
    }
}

#[test]
fn test_partition_property() {
    // Overlapping universes of varying shape; every union element must land
    // in exactly one region, and the regions must cover the union.
    let families = vec![
        vec![set(&[1, 2, 3])],
        vec![set(&[1, 2, 3]), set(&[2, 3, 4])],
        vec![set(&[1, 2]), set(&[2, 3]), set(&[3, 1])],
        vec![set(&[1, 2, 3, 4, 5]), set(&[]), set(&[2, 4, 6]), set(&[5, 6, 7])],
    ];

    for sets in families {
        let family = SetFamily::new(sets).unwrap();

        let mut covered: HashSet<i32> = HashSet::new();
        for (key, region) in family.regions() {
            for element in region {
                assert!(
                    covered.insert(*element),
                    "element {} appears in more than one region (second: {})",
                    element,
                    key
                );
            }
        }
        assert_eq!(&covered, family.union());
    }
}

#[test]
fn test_full_key_region_equals_intersection() {
    let family = SetFamily::new(vec![
        set(&[1, 2, 3, 4]),
        set(&[2, 3, 4, 5]),
        set(&[3, 4, 5, 6]),
    ])
    .unwrap();

    assert_eq!(family.exclusive_to(0, &[1, 2]).unwrap(), family.intersection());
    assert_eq!(family.intersection(), &set(&[3, 4]));

    // The full key reached through from_bits agrees with the varargs form.
    let full = SubsetKey::full(3);
    let (_, region) = family
        .regions()
        .find(|(key, _)| *key == full)
        .expect("full key must be present");
    assert_eq!(region, family.intersection());
}

#[test]
fn test_index_validation() {
    let family =
        SetFamily::new(vec![set(&[1]), set(&[2]), set(&[3])]).unwrap();

    assert_eq!(
        family.exclusive_to(3, &[]).unwrap_err(),
        ModelError::IndexOutOfRange { index: 3, len: 3 }
    );
    // Range violations win over the argument-count rule
    assert_eq!(
        family.exclusive_to(0, &[1, 2, 99]).unwrap_err(),
        ModelError::IndexOutOfRange { index: 99, len: 3 }
    );
    // Within range but over the N-1 additional-argument ceiling
    assert_eq!(
        family.exclusive_to(0, &[1, 2, 2]).unwrap_err(),
        ModelError::TooManyIndices {
            supplied: 3,
            max: 2
        }
    );
}

#[test]
fn test_duplicate_arguments_within_ceiling_are_fine() {
    let family = SetFamily::new(vec![set(&[1, 2]), set(&[2, 3])]).unwrap();
    assert_eq!(family.exclusive_to(0, &[0]).unwrap(), &set(&[1]));
}

#[test]
fn test_family_is_a_snapshot() {
    let mut a = set(&[1, 2, 3]);
    let family = SetFamily::new(vec![a.clone(), set(&[2, 3, 4])]).unwrap();

    a.insert(99);
    assert!(!family.union().contains(&99));
    assert_eq!(family.get(0).unwrap(), &set(&[1, 2, 3]));
}

#[test]
fn test_string_elements() {
    let words = |w: &[&str]| -> HashSet<String> {
        w.iter().map(|s| s.to_string()).collect()
    };
    let family =
        SetFamily::new(vec![words(&["ape", "bee"]), words(&["bee", "cat"])]).unwrap();

    assert_eq!(family.exclusive_to(0, &[1]).unwrap(), &words(&["bee"]));
    assert_eq!(family.exclusive_to(1, &[]).unwrap(), &words(&["cat"]));
}
