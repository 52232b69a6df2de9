//! Picker runtime - owns terminal, runs event loop, executes effects.
//!
//! The reducer stays pure and produces effects; this module executes them.
//! Everything is synchronous: input arrives from a blocking crossterm poll
//! and each controller operation completes before the next event is read.

use std::io::Stderr;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::state::{AppState, Outcome};
use crate::update::{self, UiEffect, UiEvent};
use crate::{PickerOptions, render, terminal};

/// Poll duration when idle. Nothing animates, so a long timeout keeps CPU
/// usage down without hurting input latency.
const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen picker runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is guaranteed to be restored on drop or panic.
pub struct PickerRuntime {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stderr>>,
    /// Session state.
    pub state: AppState,
    /// Whether mouse capture is enabled for this session.
    mouse: bool,
}

impl PickerRuntime {
    /// Creates a new picker runtime.
    pub fn new(options: &PickerOptions) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state: AppState::new(options.initial),
            mouse: options.mouse,
        })
    }

    /// Runs the event loop until the user confirms or cancels.
    pub fn run(&mut self) -> Result<Outcome> {
        if self.mouse {
            terminal::enable_mouse_capture()?;
        }

        let result = self.event_loop();

        if self.mouse {
            let _ = terminal::disable_mouse_capture();
        }

        result
    }

    fn event_loop(&mut self) -> Result<Outcome> {
        let mut dirty = true; // Start dirty to ensure initial render

        loop {
            // Only render if something changed
            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }

            let events = collect_events()?;

            for event in events {
                // Terminal input can change state; Tick never does
                if matches!(&event, UiEvent::Terminal(_)) {
                    dirty = true;
                }

                let effects = update::update(&mut self.state, event);
                for effect in effects {
                    match effect {
                        UiEffect::Quit(outcome) => return Ok(outcome),
                    }
                }
            }
        }
    }
}

/// Blocks until input arrives or the idle poll times out, then drains any
/// buffered terminal events without blocking.
fn collect_events() -> Result<Vec<UiEvent>> {
    let mut events = Vec::new();

    if event::poll(IDLE_POLL_DURATION)? {
        events.push(UiEvent::Terminal(event::read()?));
        while event::poll(Duration::ZERO)? {
            events.push(UiEvent::Terminal(event::read()?));
        }
    } else {
        events.push(UiEvent::Tick);
    }

    Ok(events)
}

impl Drop for PickerRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
