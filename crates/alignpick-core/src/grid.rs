//! The 3×3 alignment grid: axis enums, positions, labels.
//!
//! Pure mapping utilities with no mutable state. The grid is the coordinate
//! space the selection controller moves through; renderers use it to lay out
//! cells and to translate between cells and their canonical labels.

use std::fmt;
use std::str::FromStr;

use crate::error::SelectionError;

/// Vertical alignment (grid row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Horizontal alignment (grid column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl VAlign {
    /// Display name used in labels.
    pub const fn name(self) -> &'static str {
        match self {
            VAlign::Top => "top",
            VAlign::Center => "center",
            VAlign::Bottom => "bottom",
        }
    }

    const fn index(self) -> usize {
        match self {
            VAlign::Top => 0,
            VAlign::Center => 1,
            VAlign::Bottom => 2,
        }
    }

    /// One row toward the top; clamps at the top edge.
    pub(crate) const fn toward_top(self) -> Self {
        match self {
            VAlign::Top | VAlign::Center => VAlign::Top,
            VAlign::Bottom => VAlign::Center,
        }
    }

    /// One row toward the bottom; clamps at the bottom edge.
    pub(crate) const fn toward_bottom(self) -> Self {
        match self {
            VAlign::Top => VAlign::Center,
            VAlign::Center | VAlign::Bottom => VAlign::Bottom,
        }
    }
}

impl HAlign {
    /// Display name used in labels.
    pub const fn name(self) -> &'static str {
        match self {
            HAlign::Left => "left",
            HAlign::Center => "center",
            HAlign::Right => "right",
        }
    }

    const fn index(self) -> usize {
        match self {
            HAlign::Left => 0,
            HAlign::Center => 1,
            HAlign::Right => 2,
        }
    }

    /// One column toward the left; clamps at the left edge.
    pub(crate) const fn toward_left(self) -> Self {
        match self {
            HAlign::Left | HAlign::Center => HAlign::Left,
            HAlign::Right => HAlign::Center,
        }
    }

    /// One column toward the right; clamps at the right edge.
    pub(crate) const fn toward_right(self) -> Self {
        match self {
            HAlign::Left => HAlign::Center,
            HAlign::Center | HAlign::Right => HAlign::Right,
        }
    }
}

/// One of the nine grid cells, as a (row, column) pair.
///
/// The canonical label `"<row> <column>"` (e.g. `"top left"`) is the sole
/// externally observable identifier of a position; [`fmt::Display`] and
/// [`Position::from_label`] convert in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: VAlign,
    pub col: HAlign,
}

impl Position {
    /// The default selection, `"center center"`.
    pub const CENTER: Position = Position::new(VAlign::Center, HAlign::Center);

    /// All nine positions in row-major order (top-left → bottom-right).
    pub const ALL: [Position; 9] = [
        Position::new(VAlign::Top, HAlign::Left),
        Position::new(VAlign::Top, HAlign::Center),
        Position::new(VAlign::Top, HAlign::Right),
        Position::new(VAlign::Center, HAlign::Left),
        Position::new(VAlign::Center, HAlign::Center),
        Position::new(VAlign::Center, HAlign::Right),
        Position::new(VAlign::Bottom, HAlign::Left),
        Position::new(VAlign::Bottom, HAlign::Center),
        Position::new(VAlign::Bottom, HAlign::Right),
    ];

    pub const fn new(row: VAlign, col: HAlign) -> Self {
        Self { row, col }
    }

    /// The canonical label, e.g. `"bottom right"`.
    pub fn label(self) -> String {
        format!("{} {}", self.row.name(), self.col.name())
    }

    /// Parses a canonical label back into a position.
    ///
    /// # Errors
    /// Returns [`SelectionError::InvalidLabel`] unless `label` is exactly one
    /// of the nine canonical labels.
    pub fn from_label(label: &str) -> Result<Self, SelectionError> {
        let invalid = || SelectionError::InvalidLabel {
            label: label.to_string(),
        };
        let (row, col) = label.split_once(' ').ok_or_else(invalid)?;
        let row = match row {
            "top" => VAlign::Top,
            "center" => VAlign::Center,
            "bottom" => VAlign::Bottom,
            _ => return Err(invalid()),
        };
        let col = match col {
            "left" => HAlign::Left,
            "center" => HAlign::Center,
            "right" => HAlign::Right,
            _ => return Err(invalid()),
        };
        Ok(Self { row, col })
    }

    /// Row-major cell index in `0..9`, matching [`Position::ALL`] order.
    pub const fn index(self) -> usize {
        self.row.index() * 3 + self.col.index()
    }

    /// Looks up a position by row-major cell index.
    ///
    /// # Errors
    /// Returns [`SelectionError::InvalidPosition`] when `index` is not in
    /// `0..9`.
    pub fn from_index(index: usize) -> Result<Self, SelectionError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(SelectionError::InvalidPosition { index })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row.name(), self.col.name())
    }
}

impl FromStr for Position {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_for_all_positions() {
        for position in Position::ALL {
            let label = position.label();
            assert_eq!(Position::from_label(&label), Ok(position), "{label}");
        }
    }

    #[test]
    fn test_all_positions_are_row_major() {
        let labels: Vec<String> = Position::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            [
                "top left",
                "top center",
                "top right",
                "center left",
                "center center",
                "center right",
                "bottom left",
                "bottom center",
                "bottom right",
            ]
        );
    }

    #[test]
    fn test_malformed_labels_are_rejected() {
        for label in [
            "diagonal up",
            "",
            "top",
            "top  left",
            "Top Left",
            "top left extra",
            " top left",
        ] {
            assert_eq!(
                Position::from_label(label),
                Err(SelectionError::InvalidLabel {
                    label: label.to_string()
                }),
                "{label:?}"
            );
        }
    }

    #[test]
    fn test_index_round_trip() {
        for (index, position) in Position::ALL.into_iter().enumerate() {
            assert_eq!(position.index(), index);
            assert_eq!(Position::from_index(index), Ok(position));
        }
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        assert_eq!(
            Position::from_index(9),
            Err(SelectionError::InvalidPosition { index: 9 })
        );
    }

    #[test]
    fn test_default_is_center() {
        assert_eq!(Position::default(), Position::CENTER);
        assert_eq!(Position::CENTER.label(), "center center");
    }
}
