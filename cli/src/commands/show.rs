//! `atelier show` — render an agent's configuration.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::editor::{ConfigEditor, LoadOutcome};
use crate::commands::report_agent_not_found;
use crate::output::{human, json};

/// Arguments for the show command.
#[derive(Args)]
#[command(disable_version_flag = true)]
pub struct ShowArgs {
    /// Agent identifier
    pub agent_id: String,

    /// Pin a historical version (read-only view)
    #[arg(long)]
    pub version: Option<String>,
}

/// Run the show command.
pub async fn run(app: &AppContext, args: &ShowArgs) -> Result<ExitCode> {
    let mut editor = ConfigEditor::new(&args.agent_id)?;
    match editor.load(&app.backend, args.version.as_deref()).await? {
        LoadOutcome::NotFound => report_agent_not_found(app),
        LoadOutcome::Ready => {
            let display = editor.display_data();
            let style = editor.current_style();
            if app.is_json() {
                let payload = serde_json::json!({
                    "agent_id": args.agent_id,
                    "display": display,
                    "style": { "glyph": style.glyph, "color": style.color },
                    "viewing_old_version": editor.is_viewing_old_version(),
                });
                println!("{}", json::format_pretty(&payload)?);
            } else if let Some(agent) = editor.agent() {
                human::render_agent(
                    &app.output,
                    agent,
                    &display,
                    &style,
                    editor.version_data(),
                    editor.is_viewing_old_version(),
                );
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
