// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two tiers of the diagram model.
//!
//! - [`SetFamily`]: immutable derived views (union, intersection, exclusive
//!   regions), computed once at construction.
//! - [`SelectionView`]: the mutable tier — a union-constrained selection
//!   kept consistent with the live base sets.

pub mod family;
pub mod selection;

// Re-export for convenience
pub use family::SetFamily;
pub use selection::SelectionView;
