//! Picker session state.
//!
//! `AppState` hosts the [`SelectionController`] and mirrors its notification
//! stream into UI-visible state. The controller owns the authoritative
//! selection; the highlighted cell is derived from `current()` every frame
//! and never stored here.

use std::cell::Cell;
use std::sync::mpsc;

use alignpick_core::{Direction, Position, SelectionChange, SelectionController};
use ratatui::layout::Rect;
use thiserror::Error;

/// How a picker session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// User confirmed this cell.
    Picked(Position),
    /// User dismissed the picker.
    Cancelled,
}

/// Marker error for a cancelled session.
///
/// The binary downcasts this to exit nonzero without printing an error chain.
#[derive(Debug, Clone, Copy, Error)]
#[error("selection cancelled")]
pub struct Cancelled;

/// State for one picker session.
pub struct AppState {
    /// The selection state machine; sole owner of the current cell.
    pub controller: SelectionController,
    /// Cell the session started on; restored by the reset key.
    pub initial: Position,
    /// Label most recently reported through the change listener.
    pub last_reported: Option<String>,
    /// Per-cell screen rects in row-major order (set during render, used for
    /// mouse click routing).
    pub cell_areas: Cell<[Rect; 9]>,
    /// Change notifications queued by the listener, drained after each
    /// controller call.
    notifications: mpsc::Receiver<SelectionChange>,
}

impl AppState {
    pub fn new(initial: Position) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut controller = SelectionController::with_initial(initial);
        controller.set_listener(move |change: &SelectionChange| {
            let _ = tx.send(change.clone());
        });
        Self {
            controller,
            initial,
            last_reported: None,
            cell_areas: Cell::new([Rect::default(); 9]),
            notifications: rx,
        }
    }

    /// Restores the starting cell.
    ///
    /// This is a host-driven reset, not a user transition, so it goes through
    /// `set_position` and is not reported to the listener.
    pub fn reset(&mut self) {
        self.controller.set_position(self.initial);
    }

    /// Forwards an arrow key to the controller.
    pub fn nudge(&mut self, direction: Direction) {
        self.controller.nudge(direction);
        self.drain_notifications();
    }

    /// Forwards a click (or digit shortcut) to the controller.
    pub fn select(&mut self, target: Position) {
        self.controller.select(target);
        self.drain_notifications();
    }

    fn drain_notifications(&mut self) {
        while let Ok(change) = self.notifications.try_recv() {
            self.last_reported = Some(change.label);
        }
    }
}
