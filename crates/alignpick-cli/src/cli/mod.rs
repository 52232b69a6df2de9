//! CLI entry and dispatch.

use alignpick_core::config::Config;
use anyhow::{Context, Result};
use clap::Parser;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "alignpick")]
#[command(version)]
#[command(about = "Terminal alignment matrix picker")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    pick_args: PickArgs,
}

/// Arguments for the interactive picker (the default command).
#[derive(clap::Args, Debug, Clone, Default)]
struct PickArgs {
    /// Starting cell, as a "<row> <column>" label (default from config)
    #[arg(long, value_name = "LABEL")]
    initial: Option<String>,

    /// Persist the picked cell as the configured default
    #[arg(long)]
    save: bool,

    /// Do not capture mouse clicks
    #[arg(long = "no-mouse")]
    no_mouse: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Pick a cell interactively (the default when no command is given)
    Pick {
        #[command(flatten)]
        args: PickArgs,
    },

    /// Replay arrow moves and print each reported label
    Moves {
        /// Starting cell, as a "<row> <column>" label (default from config)
        #[arg(long, value_name = "LABEL")]
        from: Option<String>,

        /// Directions to apply in order: up, down, left, right
        #[arg(value_name = "DIRECTION")]
        directions: Vec<String>,
    },

    /// Print the nine cell labels in row-major order
    Cells {
        /// Emit a JSON array instead of one label per line
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // The picker owns the terminal, so interactive sessions log to a file
    let interactive = matches!(cli.command, None | Some(Commands::Pick { .. }));
    let _log_guard = logging::init(interactive).context("init logging")?;

    let config = Config::load().context("load config")?;

    let Some(command) = cli.command else {
        return commands::pick::run(&config, &cli.pick_args.into());
    };

    match command {
        Commands::Pick { args } => commands::pick::run(&config, &args.into()),
        Commands::Moves { from, directions } => {
            commands::moves::run(&config, from.as_deref(), &directions)
        }
        Commands::Cells { json } => commands::cells::run(json),
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

impl From<PickArgs> for commands::pick::PickOptions {
    fn from(args: PickArgs) -> Self {
        Self {
            initial: args.initial,
            save: args.save,
            no_mouse: args.no_mouse,
        }
    }
}
