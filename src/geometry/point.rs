// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A 2-D point, used as the label anchor ("lune center") of a region.
//!
//! The model never computes with points; it only stores and returns them on
//! behalf of an external layout solver.

/// A point in diagram coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
