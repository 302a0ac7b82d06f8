//! `atelier edit` — apply field changes through the editor and save.

use std::process::ExitCode;

use anyhow::Result;
use atelier_common::ToolFlag;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::editor::{ConfigEditor, LoadOutcome, SaveOutcome};
use crate::commands::report_agent_not_found;
use crate::domain::draft::FieldChange;
use crate::domain::error::SaveError;
use crate::output::json;
use crate::output::reporter::TerminalNotifier;

/// Arguments for the edit command.
#[derive(Args)]
#[command(disable_version_flag = true)]
pub struct EditArgs {
    /// Agent identifier
    pub agent_id: String,

    /// Pin a historical version (edits will be rejected)
    #[arg(long)]
    pub version: Option<String>,

    /// New agent name
    #[arg(long)]
    pub name: Option<String>,

    /// New agent description
    #[arg(long)]
    pub description: Option<String>,

    /// New system prompt
    #[arg(long)]
    pub system_prompt: Option<String>,

    /// Enable a tool (repeatable)
    #[arg(long = "enable-tool", value_name = "TOOL")]
    pub enable_tools: Vec<String>,

    /// Disable a tool (repeatable)
    #[arg(long = "disable-tool", value_name = "TOOL")]
    pub disable_tools: Vec<String>,

    /// Mark or unmark the agent as default
    #[arg(long, value_name = "BOOL")]
    pub default: Option<bool>,

    /// New avatar glyph
    #[arg(long)]
    pub avatar: Option<String>,

    /// New avatar color (#RRGGBB)
    #[arg(long)]
    pub avatar_color: Option<String>,
}

/// Run the edit command.
pub async fn run(app: &AppContext, args: &EditArgs) -> Result<ExitCode> {
    let mut editor = ConfigEditor::new(&args.agent_id)?;
    if editor.load(&app.backend, args.version.as_deref()).await? == LoadOutcome::NotFound {
        return report_agent_not_found(app);
    }

    let notifier = TerminalNotifier::new(&app.output);
    if !apply_changes(&mut editor, &notifier, args) {
        // At least one edit was rejected (read-only historical view).
        return Ok(ExitCode::FAILURE);
    }

    if !editor.has_unsaved_changes() {
        app.output.info("No changes to save");
        return Ok(ExitCode::SUCCESS);
    }

    match editor.save(&app.backend, &notifier).await {
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
            app.output.info("Nothing to save");
            Ok(ExitCode::SUCCESS)
        }
        SaveOutcome::Failed(err) => {
            if app.is_json() {
                let code = match err {
                    SaveError::CreateVersion { .. } => "create_version_failed",
                    SaveError::UpdateMetadata { .. } => "update_metadata_failed",
                };
                println!("{}", json::format_error(&err.to_string(), code)?);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Apply every requested change. Returns `false` when any edit is rejected.
fn apply_changes(
    editor: &mut ConfigEditor,
    notifier: &TerminalNotifier<'_>,
    args: &EditArgs,
) -> bool {
    let mut ok = true;

    if let Some(name) = &args.name {
        ok &= editor.set_field(notifier, FieldChange::Name(name.clone()));
    }
    if let Some(description) = &args.description {
        ok &= editor.set_field(notifier, FieldChange::Description(description.clone()));
    }
    if let Some(prompt) = &args.system_prompt {
        ok &= editor.set_field(notifier, FieldChange::SystemPrompt(prompt.clone()));
    }
    if let Some(default) = args.default {
        ok &= editor.set_field(notifier, FieldChange::IsDefault(default));
    }

    if !args.enable_tools.is_empty() || !args.disable_tools.is_empty() {
        let mut tools = editor.draft().tools.clone();
        for name in &args.enable_tools {
            set_tool(&mut tools, name, true);
        }
        for name in &args.disable_tools {
            set_tool(&mut tools, name, false);
        }
        ok &= editor.set_field(notifier, FieldChange::Tools(tools));
    }

    if args.avatar.is_some() || args.avatar_color.is_some() {
        let avatar = args.avatar.clone().or_else(|| editor.draft().avatar.clone());
        let color = args
            .avatar_color
            .clone()
            .or_else(|| editor.draft().avatar_color.clone());
        ok &= editor.set_style(notifier, avatar, color);
    }

    ok
}

/// Flip one tool flag, keeping an existing description intact.
fn set_tool(tools: &mut atelier_common::ToolMap, name: &str, enabled: bool) {
    let flag = match tools.get(name) {
        Some(ToolFlag::Entry { description, .. }) => ToolFlag::Entry {
            enabled,
            description: description.clone(),
        },
        _ => ToolFlag::Enabled(enabled),
    };
    tools.insert(name.to_string(), flag);
}
