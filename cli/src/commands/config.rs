//! `atelier config` — show and set configuration values.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::application::services::config_service;
use crate::domain::config::VALID_CONFIG_KEYS;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show one configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
    /// Show all configuration values
    List,
}

/// Run the config command.
pub fn run(app: &AppContext, cmd: ConfigCommand) -> Result<ExitCode> {
    match cmd {
        ConfigCommand::Get { key } => {
            let value = config_service::get_setting(&app.config_store, &key)?;
            println!("{value}");
            Ok(ExitCode::SUCCESS)
        }
        ConfigCommand::Set { key, value } => {
            config_service::set_setting(&app.config_store, &key, &value)?;
            app.output.success(&format!("Set {key} = {value}"));
            Ok(ExitCode::SUCCESS)
        }
        ConfigCommand::List => {
            let config = config_service::load_config(&app.config_store)?;
            for key in VALID_CONFIG_KEYS {
                app.output
                    .kv(key, &config.get_value(key).unwrap_or_default());
            }
            let path = app.config_store.path()?;
            app.output.kv("file", &path.display().to_string());
            Ok(ExitCode::SUCCESS)
        }
    }
}
