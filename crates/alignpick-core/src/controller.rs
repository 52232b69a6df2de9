//! Selection controller: the state machine behind the picker.
//!
//! The controller owns the single current [`Position`] and is the only place
//! it changes. Hosts forward clicks as [`SelectionController::select`] and
//! arrow keys as [`SelectionController::nudge`]; both return the new
//! selection for focus placement and report it to the registered listener.
//!
//! Notification contract: every `select` and every `nudge` notifies, in
//! invocation order, synchronously inside the call. This includes a re-click
//! of the already-selected cell and an edge-clamped nudge that resolves to
//! the unchanged position. Initialization and
//! [`SelectionController::set_position`] never notify; notifications announce
//! user-driven transitions only.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::SelectionError;
use crate::grid::Position;

/// One step of arrow-key navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Word used on the command line and in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(SelectionError::InvalidDirection {
                token: s.to_string(),
            }),
        }
    }
}

/// Payload delivered to the change listener after each transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    /// The selection the operation resolved to.
    pub position: Position,
    /// Canonical label of `position`; what external callers observe.
    pub label: String,
}

/// Receiver for change notifications.
///
/// A controller holds at most one listener; the host owns the subscription
/// and may replace or clear it at any time. Delivery is synchronous, inside
/// the mutating call that produced the change.
pub trait ChangeListener {
    fn on_change(&mut self, change: &SelectionChange);
}

impl<F> ChangeListener for F
where
    F: FnMut(&SelectionChange),
{
    fn on_change(&mut self, change: &SelectionChange) {
        self(change);
    }
}

/// Owns the current selection and applies click and arrow transitions.
///
/// Nine states (the positions), cardinal edges with self-loops at the grid
/// boundary, plus a jump edge from every state to every state for clicks.
/// There is no deselected state; a position is always held.
pub struct SelectionController {
    selection: Position,
    listener: Option<Box<dyn ChangeListener>>,
}

impl SelectionController {
    /// Controller starting at `"center center"`. No notification is raised.
    pub fn new() -> Self {
        Self::with_initial(Position::CENTER)
    }

    /// Controller starting at `initial`. No notification is raised.
    pub fn with_initial(initial: Position) -> Self {
        Self {
            selection: initial,
            listener: None,
        }
    }

    /// The current selection. No side effects.
    pub fn current(&self) -> Position {
        self.selection
    }

    /// Registers the change listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl ChangeListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the change listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Click semantics: absolute selection of `target`.
    ///
    /// Always notifies with `target`'s label, even when `target` equals the
    /// previous selection. Returns the new selection.
    pub fn select(&mut self, target: Position) -> Position {
        let previous = self.selection;
        self.selection = target;
        debug!(from = %previous, to = %target, "select");
        self.notify(target);
        target
    }

    /// Arrow semantics: one step along the axis implied by `direction`,
    /// clamped at the grid edge (no wraparound).
    ///
    /// Always notifies with the resolved position's label, including when the
    /// step was clamped and the selection is unchanged. Returns the new
    /// selection.
    pub fn nudge(&mut self, direction: Direction) -> Position {
        let previous = self.selection;
        let next = step(previous, direction);
        self.selection = next;
        debug!(from = %previous, to = %next, clamped = previous == next, "nudge");
        self.notify(next);
        next
    }

    /// Externally-driven reset for hosts whose own state owns the value.
    ///
    /// Replaces the selection without notifying, mirroring initialization.
    pub fn set_position(&mut self, position: Position) {
        debug!(to = %position, "set_position");
        self.selection = position;
    }

    fn notify(&mut self, position: Position) {
        if let Some(listener) = self.listener.as_mut() {
            let change = SelectionChange {
                position,
                label: position.label(),
            };
            listener.on_change(&change);
        }
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("selection", &self.selection)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

fn step(from: Position, direction: Direction) -> Position {
    match direction {
        Direction::Up => Position::new(from.row.toward_top(), from.col),
        Direction::Down => Position::new(from.row.toward_bottom(), from.col),
        Direction::Left => Position::new(from.row, from.col.toward_left()),
        Direction::Right => Position::new(from.row, from.col.toward_right()),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Controller wired to a listener that records every reported label.
    fn recording_controller(initial: Position) -> (SelectionController, Rc<RefCell<Vec<String>>>) {
        let reported = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&reported);
        let mut controller = SelectionController::with_initial(initial);
        controller.set_listener(move |change: &SelectionChange| {
            sink.borrow_mut().push(change.label.clone());
        });
        (controller, reported)
    }

    #[test]
    fn test_defaults_to_center() {
        let controller = SelectionController::new();
        assert_eq!(controller.current(), Position::CENTER);
        assert_eq!(controller.current().label(), "center center");
    }

    #[test]
    fn test_initialization_does_not_notify() {
        let (_, reported) = recording_controller(Position::CENTER);
        assert!(reported.borrow().is_empty());
    }

    #[test]
    fn test_select_is_absolute_and_always_reports() {
        let (mut controller, reported) = recording_controller(Position::CENTER);
        for target in Position::ALL {
            let result = controller.select(target);
            assert_eq!(result, target);
            assert_eq!(controller.current(), target);
            assert_eq!(reported.borrow().last(), Some(&target.label()));
        }
        assert_eq!(reported.borrow().len(), 9);
    }

    #[test]
    fn test_reselecting_current_cell_still_reports() {
        let (mut controller, reported) = recording_controller(Position::CENTER);
        controller.select(Position::CENTER);
        controller.select(Position::CENTER);
        assert_eq!(
            *reported.borrow(),
            ["center center", "center center"],
            "each click reports, including no-op clicks"
        );
    }

    #[test]
    fn test_nudge_moves_one_step_from_center() {
        let cases = [
            (Direction::Up, "top center"),
            (Direction::Left, "center left"),
            (Direction::Down, "bottom center"),
            (Direction::Right, "center right"),
        ];
        for (direction, expected) in cases {
            let (mut controller, reported) = recording_controller(Position::CENTER);
            let result = controller.nudge(direction);
            assert_eq!(result.label(), expected);
            assert_eq!(controller.current(), result);
            assert_eq!(*reported.borrow(), [expected]);
        }
    }

    #[test]
    fn test_nudge_clamps_at_top_left_and_still_reports() {
        let top_left = Position::from_label("top left").unwrap();
        for direction in [Direction::Up, Direction::Left] {
            let (mut controller, reported) = recording_controller(top_left);
            let result = controller.nudge(direction);
            assert_eq!(result, top_left, "{direction} should clamp");
            assert_eq!(controller.current(), top_left);
            assert_eq!(*reported.borrow(), ["top left"]);
        }
    }

    #[test]
    fn test_nudge_clamps_at_bottom_right_and_still_reports() {
        let bottom_right = Position::from_label("bottom right").unwrap();
        for direction in [Direction::Down, Direction::Right] {
            let (mut controller, reported) = recording_controller(bottom_right);
            let result = controller.nudge(direction);
            assert_eq!(result, bottom_right, "{direction} should clamp");
            assert_eq!(*reported.borrow(), ["bottom right"]);
        }
    }

    #[test]
    fn test_notifications_arrive_in_invocation_order() {
        let (mut controller, reported) = recording_controller(Position::CENTER);
        controller.nudge(Direction::Up);
        controller.nudge(Direction::Up);
        controller.select(Position::from_label("bottom right").unwrap());
        controller.nudge(Direction::Right);
        assert_eq!(
            *reported.borrow(),
            ["top center", "top center", "bottom right", "bottom right"]
        );
    }

    #[test]
    fn test_set_position_does_not_notify() {
        let (mut controller, reported) = recording_controller(Position::CENTER);
        let target = Position::from_label("top right").unwrap();
        controller.set_position(target);
        assert_eq!(controller.current(), target);
        assert!(reported.borrow().is_empty());
    }

    #[test]
    fn test_clear_listener_stops_reporting() {
        let (mut controller, reported) = recording_controller(Position::CENTER);
        controller.nudge(Direction::Up);
        controller.clear_listener();
        controller.nudge(Direction::Down);
        assert_eq!(*reported.borrow(), ["top center"]);
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("right".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!(
            "diagonal".parse::<Direction>(),
            Err(SelectionError::InvalidDirection {
                token: "diagonal".to_string()
            })
        );
    }
}
