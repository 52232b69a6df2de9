//! Error types for the selection core.

use thiserror::Error;

/// Errors raised when untyped host input (labels, indices, direction words)
/// names something outside the nine-cell grid.
///
/// These signal host integration bugs, not recoverable runtime conditions.
/// They are surfaced to the caller of the offending operation instead of
/// being coerced to a nearby valid value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// String passed to [`crate::grid::Position::from_label`] is not one of
    /// the nine canonical labels.
    #[error("invalid alignment label {label:?} (expected \"<row> <column>\", e.g. \"top left\")")]
    InvalidLabel { label: String },

    /// Cell index passed to [`crate::grid::Position::from_index`] is outside
    /// the row-major range `0..9`.
    #[error("invalid cell index {index} (expected 0..9)")]
    InvalidPosition { index: usize },

    /// Word passed to [`crate::controller::Direction`] parsing is not one of
    /// the four recognized directions.
    #[error("invalid direction {token:?} (expected up, down, left, or right)")]
    InvalidDirection { token: String },
}
