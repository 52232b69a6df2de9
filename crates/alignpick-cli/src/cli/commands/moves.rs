//! Non-interactive replay command handler.
//!
//! Stdout is exactly the controller's notification stream: one label per
//! applied direction, including directions that clamped at a grid edge.

use alignpick_core::config::Config;
use alignpick_core::{Direction, Position, SelectionChange, SelectionController};
use anyhow::Result;

pub fn run(config: &Config, from: Option<&str>, directions: &[String]) -> Result<()> {
    let initial = match from {
        Some(label) => Position::from_label(label)?,
        None => config.initial_position()?,
    };

    // Reject the whole sequence before reporting anything
    let directions = directions
        .iter()
        .map(|token| token.parse())
        .collect::<Result<Vec<Direction>, _>>()?;

    let mut controller = SelectionController::with_initial(initial);
    controller.set_listener(|change: &SelectionChange| {
        println!("{}", change.label);
    });

    for direction in directions {
        controller.nudge(direction);
    }

    Ok(())
}
