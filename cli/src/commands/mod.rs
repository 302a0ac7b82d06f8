//! Command implementations

pub mod activate;
pub mod config;
pub mod edit;
pub mod list;
pub mod show;
pub mod snapshot;
pub mod version;
pub mod versions;

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::output::json;

/// Report a missing agent in the active output mode and fail.
pub(crate) fn report_agent_not_found(app: &AppContext) -> Result<ExitCode> {
    if app.is_json() {
        println!("{}", json::format_error("Agent not found", "agent_not_found")?);
    } else {
        app.output.error("Agent not found");
    }
    Ok(ExitCode::FAILURE)
}
