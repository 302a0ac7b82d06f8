//! `atelier versions` — list an agent's version history.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::AgentReader;
use crate::commands::report_agent_not_found;
use crate::domain::draft::is_valid_agent_id;
use crate::domain::error::AgentError;
use crate::output::{human, json};

/// Arguments for the versions command.
#[derive(Args)]
pub struct VersionsArgs {
    /// Agent identifier
    pub agent_id: String,
}

/// Run the versions command.
pub async fn run(app: &AppContext, args: &VersionsArgs) -> Result<ExitCode> {
    if !is_valid_agent_id(&args.agent_id) {
        return Err(AgentError::InvalidId(args.agent_id.clone()).into());
    }
    let Some(agent) = app.backend.fetch_agent(&args.agent_id).await? else {
        return report_agent_not_found(app);
    };
    let versions = app.backend.list_versions(&args.agent_id).await?;

    if app.is_json() {
        println!("{}", json::format_pretty(&versions)?);
    } else if versions.is_empty() {
        app.output.info("No versions yet");
    } else {
        human::render_versions(&app.output, &versions, agent.current_version_id.as_deref());
    }
    Ok(ExitCode::SUCCESS)
}
