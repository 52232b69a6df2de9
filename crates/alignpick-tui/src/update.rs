//! Picker reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.

use alignpick_core::{Direction, Position};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::state::{AppState, Outcome};

/// Inputs to the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Idle poll timeout; no state change.
    Tick,
    /// Terminal input event (key, mouse, resize).
    Terminal(Event),
}

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// End the session with this outcome.
    Quit(Outcome),
}

/// The main reducer function.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Terminal(event) => handle_terminal_event(state, event),
    }
}

fn handle_terminal_event(state: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit(Outcome::Cancelled)],
        KeyCode::Esc | KeyCode::Char('q') => vec![UiEffect::Quit(Outcome::Cancelled)],
        KeyCode::Enter | KeyCode::Char(' ') => {
            vec![UiEffect::Quit(Outcome::Picked(state.controller.current()))]
        }
        KeyCode::Up => {
            state.nudge(Direction::Up);
            vec![]
        }
        KeyCode::Down => {
            state.nudge(Direction::Down);
            vec![]
        }
        KeyCode::Left => {
            state.nudge(Direction::Left);
            vec![]
        }
        KeyCode::Right => {
            state.nudge(Direction::Right);
            vec![]
        }
        KeyCode::Char('r') => {
            state.reset();
            vec![]
        }
        // Digit shortcuts jump to cells in row-major order: 1 = top left.
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Ok(position) = Position::from_index(index) {
                state.select(position);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return vec![];
    }
    let point = ratatui::layout::Position::new(mouse.column, mouse.row);
    let areas = state.cell_areas.get();
    for (position, area) in Position::ALL.into_iter().zip(areas) {
        if area.contains(point) {
            state.select(position);
            break;
        }
    }
    vec![]
}
