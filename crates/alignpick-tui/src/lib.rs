//! Full-screen TUI picker for alignpick.

pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use alignpick_core::Position;
use anyhow::Result;
pub use runtime::PickerRuntime;
pub use state::{Cancelled, Outcome};

/// Options for one interactive picker session.
#[derive(Debug, Clone, Copy)]
pub struct PickerOptions {
    /// Cell the selection starts on.
    pub initial: Position,
    /// Whether to capture mouse clicks.
    pub mouse: bool,
}

/// Runs the interactive picker and returns how the session ended.
pub fn run_picker(options: &PickerOptions) -> Result<Outcome> {
    // The picker draws on stderr so stdout stays clean for the result
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive picker requires a terminal.\n\
             Use `alignpick moves ...` for non-interactive selection."
        );
    }

    tracing::info!(initial = %options.initial, mouse = options.mouse, "starting picker");
    let mut runtime = PickerRuntime::new(options)?;
    let outcome = runtime.run()?;
    tracing::info!(?outcome, "picker finished");
    Ok(outcome)
}
