//! Interactive pick command handler.

use alignpick_core::Position;
use alignpick_core::config::Config;
use alignpick_tui::{Cancelled, Outcome, PickerOptions};
use anyhow::{Context, Result};

/// Resolved `pick` arguments.
#[derive(Debug, Clone, Default)]
pub struct PickOptions {
    pub initial: Option<String>,
    pub save: bool,
    pub no_mouse: bool,
}

pub fn run(config: &Config, options: &PickOptions) -> Result<()> {
    let initial = match options.initial.as_deref() {
        Some(label) => Position::from_label(label)?,
        None => config.initial_position()?,
    };

    let outcome = alignpick_tui::run_picker(&PickerOptions {
        initial,
        mouse: config.mouse && !options.no_mouse,
    })?;

    match outcome {
        Outcome::Picked(position) => {
            tracing::info!(%position, save = options.save, "picked");
            println!("{position}");
            if options.save {
                Config::save_initial(&position.label()).context("save initial alignment")?;
            }
            Ok(())
        }
        Outcome::Cancelled => {
            tracing::info!("cancelled");
            Err(Cancelled.into())
        }
    }
}
