//! `atelier snapshot` — create a version from the current configuration
//! without touching agent metadata.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::editor::{ConfigEditor, LoadOutcome, SaveOutcome};
use crate::commands::report_agent_not_found;
use crate::output::json;
use crate::output::reporter::TerminalNotifier;

/// Arguments for the snapshot command.
#[derive(Args)]
pub struct SnapshotArgs {
    /// Agent identifier
    pub agent_id: String,

    /// Description label for the new version
    #[arg(long)]
    pub name: Option<String>,
}

/// Run the snapshot command.
pub async fn run(app: &AppContext, args: &SnapshotArgs) -> Result<ExitCode> {
    let mut editor = ConfigEditor::new(&args.agent_id)?;
    if editor.load(&app.backend, None).await? == LoadOutcome::NotFound {
        return report_agent_not_found(app);
    }

    let notifier = TerminalNotifier::new(&app.output);
    match editor
        .snapshot(&app.backend, &notifier, args.name.as_deref())
        .await
    {
        SaveOutcome::Saved(report) => {
            if app.is_json() {
                let payload = serde_json::json!({
                    "saved": true,
                    "version_id": report.version_id,
                    "version_name": report.version_name,
                });
                println!("{}", json::format_pretty(&payload)?);
            }
            Ok(ExitCode::SUCCESS)
        }
        SaveOutcome::Skipped => {
            app.output.info("Nothing to snapshot");
            Ok(ExitCode::SUCCESS)
        }
        SaveOutcome::Failed(err) => {
            if app.is_json() {
                println!(
                    "{}",
                    json::format_error(&err.to_string(), "create_version_failed")?
                );
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
