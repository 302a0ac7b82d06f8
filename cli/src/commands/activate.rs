//! `atelier activate` — make a version the agent's active configuration.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::editor::{ConfigEditor, LoadOutcome};
use crate::commands::report_agent_not_found;
use crate::output::reporter::TerminalNotifier;

/// Arguments for the activate command.
#[derive(Args)]
pub struct ActivateArgs {
    /// Agent identifier
    pub agent_id: String,

    /// Version identifier to activate
    pub version_id: String,
}

/// Run the activate command.
pub async fn run(app: &AppContext, args: &ActivateArgs) -> Result<ExitCode> {
    let mut editor = ConfigEditor::new(&args.agent_id)?;
    if editor.load(&app.backend, None).await? == LoadOutcome::NotFound {
        return report_agent_not_found(app);
    }

    let prompt = format!("Activate version {}?", args.version_id);
    if !app.confirm(&prompt, true)? {
        app.output.info("Aborted");
        return Ok(ExitCode::SUCCESS);
    }

    let notifier = TerminalNotifier::new(&app.output);
    let activated = editor
        .activate(&app.backend, &notifier, &args.version_id)
        .await?;
    if activated {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
