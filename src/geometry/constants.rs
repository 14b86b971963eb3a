// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Size limits for the subset-key space.
//!
//! Family size is a runtime argument, but the subset key is a machine-word
//! bitset, so the number of base sets has a hard ceiling. The ceiling is
//! enforced eagerly at family construction rather than surfacing later as a
//! shift overflow.

/// Maximum number of base sets in a family.
///
/// A [`SubsetKey`](crate::geometry::SubsetKey) stores one bit per base set
/// in a `u32`, so the key space for N sets has `2^N - 1` non-empty members.
/// 30 keeps `1 << N` comfortably inside the key width; diagrams this model
/// is built for use 2-6 sets, so the cap is never a practical constraint.
pub const MAX_SETS: usize = 30;

/// Number of non-empty subsets of `{0..n-1}`, i.e. the number of exclusive
/// regions a family of `n` sets has.
///
/// Callers must ensure `n <= MAX_SETS`.
pub const fn key_count(n: usize) -> usize {
    (1 << n) - 1
}
