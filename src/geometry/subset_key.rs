// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SubsetKey type for identifying regions of a Venn/Euler diagram.
//!
//! A SubsetKey is a compact representation of a non-empty subset of base-set
//! indices using a bitset, where bit i represents the presence of index i.
//! Two keys are equal iff they name the same indices, regardless of the
//! order or duplication of the arguments they were built from, which makes
//! the key usable as a canonical map key for exclusive regions and layout
//! anchors alike.
//!
//! # Examples
//!
//! ```
//! use venn_model::SubsetKey;
//!
//! // Construction is order-independent and deduplicating
//! assert_eq!(SubsetKey::new(1, &[2, 3]), SubsetKey::new(3, &[1, 2, 2]));
//!
//! let key = SubsetKey::new(0, &[2]);
//! assert!(key.contains(0));
//! assert!(!key.contains(1));
//! assert_eq!(key.len(), 2);
//! assert_eq!(format!("{}", key), "{0,2}");
//! ```

use crate::error::{ModelError, Result};
use crate::geometry::constants::MAX_SETS;
use std::fmt;

/// A non-empty set of base-set indices represented as a bitset.
///
/// Bit i (counting from LSB) is set if base-set index i is in the key.
/// The "first index + additional indices" constructors mirror how every
/// region lookup in the model is phrased; the mandatory first argument is
/// what keeps the key non-empty by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubsetKey(u32);

impl SubsetKey {
    /// Create a key from one mandatory index plus any further indices.
    ///
    /// Duplicates collapse and argument order is irrelevant. The key itself
    /// has no notion of a family size; use [`SubsetKey::checked`] where a
    /// family's bounds must be enforced.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= MAX_SETS` (the key width).
    pub fn new(first: usize, rest: &[usize]) -> Self {
        let mut bits = 0u32;
        for &index in std::iter::once(&first).chain(rest) {
            assert!(index < MAX_SETS, "set index out of range: {}", index);
            bits |= 1 << index;
        }
        Self(bits)
    }

    /// Create a key validated against a family of `len` base sets.
    ///
    /// All indices are range-checked first; only then is the argument count
    /// checked. A family of `len` sets never needs more than `len - 1`
    /// additional indices (the full subset is reachable with `len`
    /// arguments), so a longer `rest` is rejected outright, duplicates
    /// included.
    pub fn checked(len: usize, first: usize, rest: &[usize]) -> Result<Self> {
        for &index in std::iter::once(&first).chain(rest) {
            if index >= len {
                return Err(ModelError::IndexOutOfRange { index, len });
            }
        }
        if rest.len() > len - 1 {
            return Err(ModelError::TooManyIndices {
                supplied: rest.len(),
                max: len - 1,
            });
        }
        Ok(Self::new(first, rest))
    }

    /// Create a key from a raw bit value.
    ///
    /// Useful when enumerating the key space directly, since subset masks
    /// and keys share the same encoding.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The key naming all indices of a family of `len` sets.
    ///
    /// Its region is the intersection of every base set.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero or exceeds `MAX_SETS`.
    pub fn full(len: usize) -> Self {
        assert!(len >= 1 && len <= MAX_SETS, "invalid family size: {}", len);
        Self((1 << len) - 1)
    }

    /// Check whether the key contains a specific index.
    pub fn contains(self, index: usize) -> bool {
        index < MAX_SETS && (self.0 >> index) & 1 != 0
    }

    /// Number of indices in the key (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Always false for a constructed key; kept for bitset symmetry with
    /// keys built via [`SubsetKey::from_bits`].
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The underlying bitset value.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Iterate over the indices in the key, in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        SubsetKeyIter {
            bits: self.0,
            index: 0,
        }
    }
}

/// Iterator over the indices in a SubsetKey.
struct SubsetKeyIter {
    bits: u32,
    index: u32,
}

impl Iterator for SubsetKeyIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < MAX_SETS as u32 {
            let idx = self.index;
            self.index += 1;

            if (self.bits >> idx) & 1 != 0 {
                return Some(idx as usize);
            }
        }
        None
    }
}

impl fmt::Display for SubsetKey {
    /// Format a key as "{0,2,3}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, index) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "}}")
    }
}
