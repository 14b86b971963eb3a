// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Layout registry: geometric placements keyed by the region key space.
//!
//! A [`VennLayout`] stores what an external layout solver produced for a
//! family of N sets: one outline shape per base set (in family order), one
//! bounding rectangle enclosing all of them, and a label anchor point (the
//! "lune center") per region. The shape type is opaque to this crate; the
//! registry never inspects it.
//!
//! Lookups use the same [`SubsetKey`] discipline as
//! [`SetFamily`](crate::SetFamily): indices are validated hard, but an
//! unregistered anchor is an ordinary `None`, not an error — the solver is
//! not required to place a label in every region.

use crate::error::{ModelError, Result};
use crate::geometry::constants::MAX_SETS;
use crate::geometry::{Point, Rect, SubsetKey};
use std::collections::HashMap;

/// Solver output for one diagram: shapes, bounds, and lune centers.
#[derive(Debug, Clone)]
pub struct VennLayout<S> {
    /// One outline shape per base set, in family order.
    shapes: Vec<S>,

    /// Bounding rectangle enclosing all shapes.
    bounds: Rect,

    /// Label anchor per region. Sparse: only the regions the solver
    /// placed a label in have an entry.
    centers: HashMap<SubsetKey, Point>,
}

impl<S> VennLayout<S> {
    /// Create a registry for the given shapes and bounding rectangle.
    ///
    /// The shape list is fixed at construction; only anchor points are
    /// added afterwards.
    ///
    /// # Errors
    ///
    /// - [`ModelError::EmptyLayout`] for zero shapes
    /// - [`ModelError::FamilyTooLarge`] for more than [`MAX_SETS`] shapes
    pub fn new(shapes: Vec<S>, bounds: Rect) -> Result<Self> {
        if shapes.is_empty() {
            return Err(ModelError::EmptyLayout);
        }
        if shapes.len() > MAX_SETS {
            return Err(ModelError::FamilyTooLarge {
                size: shapes.len(),
                max: MAX_SETS,
            });
        }
        Ok(Self {
            shapes,
            bounds,
            centers: HashMap::new(),
        })
    }

    /// Number of base sets this layout was solved for.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Always false: a layout has at least one shape by construction.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The bounding rectangle enclosing all shapes.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The outline shape of the base set at `index`.
    pub fn shape(&self, index: usize) -> Result<&S> {
        self.shapes.get(index).ok_or(ModelError::IndexOutOfRange {
            index,
            len: self.shapes.len(),
        })
    }

    /// Register the lune center for the region named by the arguments.
    ///
    /// Re-adding under an equal key overwrites: last write wins.
    ///
    /// # Errors
    ///
    /// Same index validation as
    /// [`SetFamily::exclusive_to`](crate::SetFamily::exclusive_to).
    pub fn add_center(&mut self, point: Point, first: usize, rest: &[usize]) -> Result<()> {
        let key = SubsetKey::checked(self.shapes.len(), first, rest)?;
        self.centers.insert(key, point);
        Ok(())
    }

    /// The lune center registered for the region named by the arguments,
    /// or `None` if the solver placed no label there.
    ///
    /// Index validation still fails hard; only a missing registration is
    /// an ordinary `None`.
    pub fn center(&self, first: usize, rest: &[usize]) -> Result<Option<Point>> {
        let key = SubsetKey::checked(self.shapes.len(), first, rest)?;
        Ok(self.centers.get(&key).copied())
    }

    /// Iterate over all registered lune centers.
    pub fn centers(&self) -> impl Iterator<Item = (SubsetKey, Point)> + '_ {
        self.centers.iter().map(|(key, point)| (*key, *point))
    }
}
