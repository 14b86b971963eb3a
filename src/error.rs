// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the Venn model.
//!
//! Every variant is a caller-input error detected synchronously at the call
//! site. Nothing here is transient or retryable; a failed operation leaves
//! the component it was called on unmodified.

use thiserror::Error;

/// Errors reported by model, selection, and layout operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A family was constructed from zero base sets.
    #[error("at least one base set is required")]
    EmptyFamily,

    /// More base sets were supplied than the subset-key width supports.
    #[error("family of {size} sets exceeds the supported maximum of {max}")]
    FamilyTooLarge { size: usize, max: usize },

    /// A base-set index fell outside `[0, N)`.
    #[error("index {index} is out of range for a family of {len} sets")]
    IndexOutOfRange { index: usize, len: usize },

    /// More additional indices were supplied to a subset lookup than a
    /// family of this size can ever need (`N - 1`, since the full subset
    /// is reachable with N arguments).
    #[error("{supplied} additional indices supplied, but at most {max} are meaningful")]
    TooManyIndices { supplied: usize, max: usize },

    /// A layout was constructed from zero outline shapes.
    #[error("at least one outline shape is required")]
    EmptyLayout,

    /// An element absent from the union was added to the selection.
    #[error("element is not present in the union of the base sets")]
    NotInUnion,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ModelError>;
