// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric and combinatorial types for Venn/Euler diagrams.
//!
//! This module contains the small value types shared by the model and the
//! layout registry:
//! - SubsetKey: order-independent bitset identifying a region
//! - Point: a 2-D label anchor ("lune center")
//! - Rect: an axis-aligned bounding rectangle

pub mod constants;
pub mod point;
pub mod rect;
pub mod subset_key;

// Re-export for convenience
pub use constants::MAX_SETS;
pub use point::Point;
pub use rect::Rect;
pub use subset_key::SubsetKey;
