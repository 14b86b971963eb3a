// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Set family: the immutable derived views over N base sets.
//!
//! A [`SetFamily`] snapshots its base sets once and eagerly computes the
//! union, the intersection, and all `2^N - 1` exclusive regions. The
//! exclusive region for a subset S of base-set indices holds the elements
//! belonging to exactly the sets named by S and no others, so the regions
//! partition the union: every union element lies in exactly one region.
//!
//! Regions are keyed by [`SubsetKey`]; a region is stored even when empty,
//! so any structurally valid lookup succeeds.
//!
//! The family never observes later mutations of the sets it was built from.
//! Callers reacting to live base sets rebuild the family (cheap at diagram
//! cardinalities) or use [`SelectionView`](crate::SelectionView), which
//! reads the live sets directly.

use crate::error::{ModelError, Result};
use crate::geometry::constants::{key_count, MAX_SETS};
use crate::geometry::SubsetKey;
use crate::observable::SharedSet;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Immutable derived views over an ordered family of base sets.
///
/// Construction cost is `O(|union| * N)` plus the `2^N - 1` region table,
/// acceptable because N is a diagram cardinality (practically 2-6) and is
/// capped at [`MAX_SETS`] regardless.
#[derive(Debug, Clone)]
pub struct SetFamily<E> {
    /// The base-set snapshots, in the order supplied.
    sets: Vec<HashSet<E>>,

    /// Elements present in at least one base set.
    union: HashSet<E>,

    /// Elements present in all base sets.
    intersection: HashSet<E>,

    /// One region per non-empty subset of `{0..N-1}`, empty regions
    /// included. The key's bits name the sets an element belongs to.
    exclusives: HashMap<SubsetKey, HashSet<E>>,
}

impl<E: Eq + Hash + Clone> SetFamily<E> {
    /// Build the derived views from an ordered list of base sets.
    ///
    /// The sets are taken by value as the family's snapshot; later changes
    /// to whatever they were copied from do not reach the family.
    ///
    /// # Errors
    ///
    /// - [`ModelError::EmptyFamily`] for zero sets
    /// - [`ModelError::FamilyTooLarge`] for more than [`MAX_SETS`] sets
    pub fn new(sets: Vec<HashSet<E>>) -> Result<Self> {
        if sets.is_empty() {
            return Err(ModelError::EmptyFamily);
        }
        if sets.len() > MAX_SETS {
            return Err(ModelError::FamilyTooLarge {
                size: sets.len(),
                max: MAX_SETS,
            });
        }
        let n = sets.len();

        let mut union = HashSet::new();
        for set in &sets {
            union.extend(set.iter().cloned());
        }

        // Iterative pairwise intersection; associative, order-independent.
        let mut intersection = sets[0].clone();
        for set in &sets[1..] {
            intersection.retain(|e| set.contains(e));
        }

        // Seed every non-empty subset of the index universe, so that empty
        // regions are present and queryable.
        let mut exclusives: HashMap<SubsetKey, HashSet<E>> =
            HashMap::with_capacity(key_count(n));
        for bits in 1..=key_count(n) as u32 {
            exclusives.insert(SubsetKey::from_bits(bits), HashSet::new());
        }

        // Partition the union: each element's membership bitmask IS its
        // region key, the same id-as-bitmask encoding the keys use.
        for element in &union {
            let mut bits = 0u32;
            for (index, set) in sets.iter().enumerate() {
                if set.contains(element) {
                    bits |= 1 << index;
                }
            }
            // A union element is in at least one set, so bits != 0 and the
            // key was seeded above.
            if let Some(region) = exclusives.get_mut(&SubsetKey::from_bits(bits)) {
                region.insert(element.clone());
            }
        }

        debug!(
            "derived {} regions from {} base sets ({} union elements, {} common)",
            key_count(n),
            n,
            union.len(),
            intersection.len()
        );

        Ok(Self {
            sets,
            union,
            intersection,
            exclusives,
        })
    }

    /// Build a family from a snapshot of live observable sets.
    pub fn of_shared(sources: &[SharedSet<E>]) -> Result<Self> {
        Self::new(sources.iter().map(SharedSet::snapshot).collect())
    }

    /// Number of base sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Always false: a family has at least one base set by construction.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// The base-set snapshot at `index`.
    pub fn get(&self, index: usize) -> Result<&HashSet<E>> {
        self.sets.get(index).ok_or(ModelError::IndexOutOfRange {
            index,
            len: self.sets.len(),
        })
    }

    /// Elements present in at least one base set.
    pub fn union(&self) -> &HashSet<E> {
        &self.union
    }

    /// Elements present in every base set.
    ///
    /// Equal to the exclusive region of the full subset key.
    pub fn intersection(&self) -> &HashSet<E> {
        &self.intersection
    }

    /// The exclusive region for the base sets named by the arguments:
    /// elements in exactly those sets and no others.
    ///
    /// Argument order and duplication are irrelevant. The region may be
    /// empty; that is an answer, not an error.
    ///
    /// # Errors
    ///
    /// - [`ModelError::IndexOutOfRange`] for any index outside `[0, N)`
    /// - [`ModelError::TooManyIndices`] for more than `N - 1` additional
    ///   indices
    pub fn exclusive_to(&self, first: usize, rest: &[usize]) -> Result<&HashSet<E>> {
        let key = SubsetKey::checked(self.sets.len(), first, rest)?;
        // Every non-empty key was seeded at construction.
        Ok(&self.exclusives[&key])
    }

    /// Iterate over all `2^N - 1` regions, keyed by subset.
    pub fn regions(&self) -> impl Iterator<Item = (SubsetKey, &HashSet<E>)> {
        self.exclusives.iter().map(|(key, region)| (*key, region))
    }
}
