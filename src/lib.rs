// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Multi-set Venn/Euler diagram model.
//!
//! Given an ordered family of N base sets, this crate derives the read-only
//! views a Venn/Euler diagram needs — the union, the intersection, and every
//! exclusive region (elements belonging to exactly one sub-combination of the
//! base sets) — and keeps a user selection consistent with them as the base
//! sets change.
//!
//! # Architecture
//!
//! The model has two tiers:
//!
//! ## Tier 1: Derived views (immutable)
//!
//! [`SetFamily`] snapshots the base sets at construction and eagerly computes:
//! - the union and intersection over all N sets
//! - all 2^N - 1 exclusive regions, keyed by [`SubsetKey`]
//!
//! Once built, a family never changes; callers rebuild it when the base sets
//! are edited. Every exclusive region is stored, empty or not, so queries for
//! a structurally valid region always succeed.
//!
//! ## Tier 2: Selection (mutable, reactive)
//!
//! [`SelectionView`] is a mutable set constrained to the live union of its
//! base sets. It registers one change listener per base set (see
//! [`SharedSet`]) and purges stale elements synchronously whenever a base set
//! mutates, so `selection ⊆ union` holds after every completed mutation.
//!
//! # Layout
//!
//! [`VennLayout`] stores the output of an external layout solver — one
//! outline shape per base set, a bounding rectangle, and a label anchor point
//! per region — keyed by the same [`SubsetKey`] space as the exclusive
//! regions, with the same index-validation rules.
//!
//! # Example
//!
//! ```
//! use venn_model::SetFamily;
//! use std::collections::HashSet;
//!
//! let a: HashSet<i32> = [1, 2, 3].into_iter().collect();
//! let b: HashSet<i32> = [2, 3, 4].into_iter().collect();
//! let family = SetFamily::new(vec![a, b]).unwrap();
//!
//! assert_eq!(family.union().len(), 4);
//! assert_eq!(family.intersection().len(), 2);
//! assert!(family.exclusive_to(0, &[]).unwrap().contains(&1));
//! assert!(family.exclusive_to(0, &[1]).unwrap().contains(&2));
//! ```
//!
//! The model is single-threaded and synchronous: base-set mutation and the
//! resulting selection purge are one atomic unit from the caller's point of
//! view. Multi-threaded callers must wrap the whole model in their own lock.

pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod observable;

// Re-export commonly used types
pub use error::{ModelError, Result};
pub use geometry::{Point, Rect, SubsetKey};
pub use layout::VennLayout;
pub use model::{SelectionView, SetFamily};
pub use observable::{ListenerId, SharedSet, WeakSet};
