//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;

/// Edit and version agent configurations
#[derive(Parser)]
#[command(
    name = "atelier",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Skip interactive prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show an agent's configuration
    Show(commands::show::ShowArgs),

    /// Edit and save an agent's configuration
    Edit(commands::edit::EditArgs),

    /// List an agent's version history
    Versions(commands::versions::VersionsArgs),

    /// Make a version the agent's active configuration
    Activate(commands::activate::ActivateArgs),

    /// Save the current configuration as a version without touching metadata
    Snapshot(commands::snapshot::SnapshotArgs),

    /// List agents, marketplace listings, or templates as cards
    List(commands::list::ListArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            yes,
            command,
        } = self;

        if let Command::Version = command {
            commands::version::run(json);
            return Ok(ExitCode::SUCCESS);
        }

        let app = AppContext::new(&AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            behaviour: BehaviourFlags { yes },
        })?;

        match command {
            Command::Show(args) => commands::show::run(&app, &args).await,
            Command::Edit(args) => commands::edit::run(&app, &args).await,
            Command::Versions(args) => commands::versions::run(&app, &args).await,
            Command::Activate(args) => commands::activate::run(&app, &args).await,
            Command::Snapshot(args) => commands::snapshot::run(&app, &args).await,
            Command::List(args) => commands::list::run(&app, &args).await,
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Version => unreachable!("handled above"),
        }
    }
}
