//! Core alignpick library (grid model, selection controller, config).

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;

pub use controller::{ChangeListener, Direction, SelectionChange, SelectionController};
pub use error::SelectionError;
pub use grid::{HAlign, Position, VAlign};
