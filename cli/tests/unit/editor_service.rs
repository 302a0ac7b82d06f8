//! Unit tests for the editor state machine.
//!
//! Covers draft initialization, dirty tracking, the read-only historical
//! view, the two-phase save, activation, and tab forcing — all against the
//! recording mock backend.

#![allow(clippy::expect_used)]

use atelier_common::CustomMcp;
use atelier_cli::application::services::editor::{
    ACTIVATE_FAILURE_NOTICE, ACTIVATE_SUCCESS_NOTICE, ConfigEditor, LoadOutcome,
    OLD_VERSION_NOTICE, SAVE_SUCCESS_NOTICE, SaveOutcome, Tab,
};
use atelier_cli::domain::draft::FieldChange;
use atelier_cli::domain::error::SaveError;

use crate::mocks::{CountingNotifier, RecordingBackend, sample_agent, sample_version};

async fn loaded_editor(backend: &RecordingBackend) -> ConfigEditor {
    let mut editor = ConfigEditor::new("a-1").expect("valid id");
    let outcome = editor.load(backend, None).await.expect("load");
    assert_eq!(outcome, LoadOutcome::Ready);
    editor
}

// ── Loading and dirty tracking ────────────────────────────────────────────────

#[tokio::test]
async fn test_load_initializes_draft_from_current_version() {
    let backend = RecordingBackend::new(Some(sample_agent()));
    let editor = loaded_editor(&backend).await;

    assert_eq!(editor.draft().system_prompt, "current prompt");
    assert_eq!(editor.draft().name, "Helper");
    assert!(!editor.has_unsaved_changes());
    assert!(!editor.is_viewing_old_version());
}

#[tokio::test]
async fn test_load_missing_agent_reports_not_found() {
    let backend = RecordingBackend::new(None);
    let mut editor = ConfigEditor::new("a-1").expect("valid id");
    let outcome = editor.load(&backend, None).await.expect("load");
    assert_eq!(outcome, LoadOutcome::NotFound);
}

#[tokio::test]
async fn test_load_missing_version_is_an_error() {
    let backend = RecordingBackend::new(Some(sample_agent()));
    let mut editor = ConfigEditor::new("a-1").expect("valid id");
    let err = editor
        .load(&backend, Some("v-ghost"))
        .await
        .expect_err("missing version");
    assert!(err.to_string().contains("v-ghost"), "got: {err}");
}

#[tokio::test]
async fn test_invalid_agent_id_is_rejected_before_any_io() {
    let err = ConfigEditor::new("../etc").expect_err("invalid id");
    assert!(err.to_string().contains("Invalid agent id"), "got: {err}");
}

#[tokio::test]
async fn test_field_change_sets_dirty_and_revert_clears_it() {
    let backend = RecordingBackend::new(Some(sample_agent()));
    let mut editor = loaded_editor(&backend).await;
    let notifier = CountingNotifier::default();

    assert!(editor.set_field(&notifier, FieldChange::Name("Renamed".to_string())));
    assert!(editor.has_unsaved_changes());

    // Reverting to the baseline value clears dirty again — the comparison is
    // by serialized content, not by edit count.
    assert!(editor.set_field(&notifier, FieldChange::Name("Helper".to_string())));
    assert!(!editor.has_unsaved_changes());
}

// ── Read-only historical view ─────────────────────────────────────────────────

#[tokio::test]
async fn test_viewing_old_version_rejects_edits() {
    let backend = RecordingBackend::new(Some(sample_agent()))
        .with_versions(vec![sample_version("v-old", 1, "old prompt")]);
    let mut editor = ConfigEditor::new("a-1").expect("valid id");
    editor.load(&backend, Some("v-old")).await.expect("load");
    assert!(editor.is_viewing_old_version());

    let notifier = CountingNotifier::default();
    let applied = editor.set_field(&notifier, FieldChange::Name("Hacked".to_string()));
    assert!(!applied);
    assert_eq!(editor.draft().name, "Helper");
    assert!(!editor.has_unsaved_changes());
    assert_eq!(notifier.error_messages(), vec![OLD_VERSION_NOTICE]);
}

#[tokio::test]
async fn test_loading_the_active_version_is_not_read_only() {
    let mut active = sample_version("v-current", 2, "current prompt");
    active.status = atelier_common::VersionStatus::Active;
    let backend = RecordingBackend::new(Some(sample_agent())).with_versions(vec![active]);
    let mut editor = ConfigEditor::new("a-1").expect("valid id");
    editor.load(&backend, Some("v-current")).await.expect("load");
    assert!(!editor.is_viewing_old_version());
}

#[tokio::test]
async fn test_display_data_shows_snapshot_not_draft_when_viewing_old() {
    let backend = RecordingBackend::new(Some(sample_agent()))
        .with_versions(vec![sample_version("v-old", 1, "old prompt")]);
    let mut editor = ConfigEditor::new("a-1").expect("valid id");
    editor.load(&backend, Some("v-old")).await.expect("load");

    let display = editor.display_data();
    assert_eq!(display.system_prompt, "old prompt");
    // Identity fields still come from the agent record.
    assert_eq!(display.name, "Helper");
    assert_eq!(display.avatar.as_deref(), Some("🤖"));
}

// ── Tab forcing ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_builder_tab_is_forced_off_when_viewing_old_version() {
    let backend = RecordingBackend::new(Some(sample_agent()))
        .with_versions(vec![sample_version("v-old", 1, "old prompt")]);
    let mut editor = ConfigEditor::new("a-1").expect("valid id");
    assert_eq!(editor.active_tab(), Tab::Builder);

    editor.load(&backend, Some("v-old")).await.expect("load");
    assert_eq!(editor.active_tab(), Tab::Configuration);

    editor.set_active_tab(Tab::Builder);
    assert_eq!(editor.active_tab(), Tab::Configuration);
}

#[tokio::test]
async fn test_builder_tab_is_reachable_on_the_canonical_view() {
    let backend = RecordingBackend::new(Some(sample_agent()));
    let mut editor = loaded_editor(&backend).await;
    editor.set_active_tab(Tab::Configuration);
    editor.set_active_tab(Tab::Builder);
    assert_eq!(editor.active_tab(), Tab::Builder);
}

// ── Save ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_save_writes_version_then_metadata_and_promotes_baseline() {
    let backend = RecordingBackend::new(Some(sample_agent()));
    let mut editor = loaded_editor(&backend).await;
    let notifier = CountingNotifier::default();

    editor.set_field(&notifier, FieldChange::Name("Renamed".to_string()));
    editor.set_field(
        &notifier,
        FieldChange::SystemPrompt("new prompt".to_string()),
    );

    let outcome = editor.save(&backend, &notifier).await;
    let SaveOutcome::Saved(report) = outcome else {
        panic!("expected Saved, got {outcome:?}");
    };
    assert_eq!(report.version_id, "v-new-1");
    assert_eq!(backend.op_log(), vec!["create_version", "update_agent"]);

    let request = backend.created.lock().expect("lock")[0].clone();
    assert_eq!(request.system_prompt, "new prompt");
    assert_eq!(request.description, "Manual save");

    let update = backend.updates.lock().expect("lock")[0].clone();
    assert_eq!(update.name, "Renamed");

    assert!(!editor.has_unsaved_changes());
    assert_eq!(notifier.success_messages(), vec![SAVE_SUCCESS_NOTICE]);
}

#[tokio::test]
async fn test_save_normalizes_custom_mcps() {
    let backend = RecordingBackend::new(Some(sample_agent()));
    let mut editor = loaded_editor(&backend).await;
    let notifier = CountingNotifier::default();

    // A completely empty entry, as the form can produce.
    let empty: CustomMcp = serde_json::from_str("{}").expect("parse");
    editor.set_integrations(&notifier, Vec::new(), vec![empty]);

    editor.save(&backend, &notifier).await;
    let request = backend.created.lock().expect("lock")[0].clone();
    let mcp = &request.custom_mcps[0];
    assert_eq!(mcp.name, "Unnamed MCP");
    assert_eq!(mcp.transport, "sse");
    assert_eq!(mcp.config, serde_json::json!({}));
    assert!(mcp.enabled_tools.is_empty());
}

#[tokio::test]
async fn test_save_failure_in_step_one_skips_metadata_write() {
    let mut backend = RecordingBackend::new(Some(sample_agent()));
    backend.fail_create = true;
    let mut editor = loaded_editor(&backend).await;
    let notifier = CountingNotifier::default();
    editor.set_field(&notifier, FieldChange::Name("Renamed".to_string()));

    let outcome = editor.save(&backend, &notifier).await;
    let SaveOutcome::Failed(SaveError::CreateVersion { .. }) = outcome else {
        panic!("expected CreateVersion failure, got {outcome:?}");
    };
    assert_eq!(backend.op_log(), vec!["create_version"]);
    assert_eq!(backend.update_count(), 0);
    // The draft survives untouched and the user saw exactly one error.
    assert!(editor.has_unsaved_changes());
    assert_eq!(editor.draft().name, "Renamed");
    assert_eq!(notifier.error_messages().len(), 1);
}

#[tokio::test]
async fn test_save_failure_in_step_two_names_the_orphaned_version() {
    let mut backend = RecordingBackend::new(Some(sample_agent()));
    backend.fail_update = true;
    let mut editor = loaded_editor(&backend).await;
    let notifier = CountingNotifier::default();
    editor.set_field(&notifier, FieldChange::Name("Renamed".to_string()));

    let outcome = editor.save(&backend, &notifier).await;
    let SaveOutcome::Failed(SaveError::UpdateMetadata { version_id, .. }) = outcome else {
        panic!("expected UpdateMetadata failure, got {outcome:?}");
    };
    assert_eq!(version_id, "v-new-1");
    assert!(editor.has_unsaved_changes());
    let errors = notifier.error_messages();
    assert!(errors[0].contains("v-new-1"), "got: {errors:?}");
}

#[tokio::test]
async fn test_save_is_skipped_when_viewing_old_version() {
    let backend = RecordingBackend::new(Some(sample_agent()))
        .with_versions(vec![sample_version("v-old", 1, "old prompt")]);
    let mut editor = ConfigEditor::new("a-1").expect("valid id");
    editor.load(&backend, Some("v-old")).await.expect("load");

    let notifier = CountingNotifier::default();
    let outcome = editor.save(&backend, &notifier).await;
    assert!(matches!(outcome, SaveOutcome::Skipped));
    assert_eq!(backend.created_count(), 0);
}

#[tokio::test]
async fn test_save_is_skipped_before_load() {
    let backend = RecordingBackend::new(Some(sample_agent()));
    let mut editor = ConfigEditor::new("a-1").expect("valid id");
    let notifier = CountingNotifier::default();
    let outcome = editor.save(&backend, &notifier).await;
    assert!(matches!(outcome, SaveOutcome::Skipped));
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_snapshot_creates_version_without_metadata_write() {
    let backend = RecordingBackend::new(Some(sample_agent()));
    let mut editor = loaded_editor(&backend).await;
    let notifier = CountingNotifier::default();
    editor.set_field(
        &notifier,
        FieldChange::SystemPrompt("tweaked".to_string()),
    );

    let outcome = editor.snapshot(&backend, &notifier, None).await;
    assert!(matches!(outcome, SaveOutcome::Saved(_)));
    assert_eq!(backend.op_log(), vec!["create_version"]);
    assert_eq!(backend.update_count(), 0);

    let request = backend.created.lock().expect("lock")[0].clone();
    assert_eq!(request.description, "Manual snapshot");
    // The snapshot also promotes the baseline.
    assert!(!editor.has_unsaved_changes());
}

#[tokio::test]
async fn test_snapshot_honors_custom_label() {
    let backend = RecordingBackend::new(Some(sample_agent()));
    let mut editor = loaded_editor(&backend).await;
    let notifier = CountingNotifier::default();

    editor
        .snapshot(&backend, &notifier, Some("Before migration"))
        .await;
    let request = backend.created.lock().expect("lock")[0].clone();
    assert_eq!(request.description, "Before migration");
}

#[tokio::test]
async fn test_snapshot_treats_blank_label_as_absent() {
    let backend = RecordingBackend::new(Some(sample_agent()));
    let mut editor = loaded_editor(&backend).await;
    let notifier = CountingNotifier::default();

    editor.snapshot(&backend, &notifier, Some("   ")).await;
    editor.snapshot(&backend, &notifier, Some("")).await;
    let created = backend.created.lock().expect("lock").clone();
    assert_eq!(created[0].description, "Manual snapshot");
    assert_eq!(created[1].description, "Manual snapshot");
}

// ── Activation ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_activate_success_reloads_the_canonical_view() {
    let backend = RecordingBackend::new(Some(sample_agent()))
        .with_versions(vec![sample_version("v-old", 1, "old prompt")]);
    let mut editor = ConfigEditor::new("a-1").expect("valid id");
    editor.load(&backend, Some("v-old")).await.expect("load");
    assert!(editor.is_viewing_old_version());

    let notifier = CountingNotifier::default();
    let activated = editor
        .activate(&backend, &notifier, "v-old")
        .await
        .expect("activate");
    assert!(activated);
    assert_eq!(notifier.success_messages(), vec![ACTIVATE_SUCCESS_NOTICE]);

    // The pinned version is gone and the draft follows the newly active
    // configuration.
    assert!(!editor.is_viewing_old_version());
    assert!(editor.version_data().is_none());
    assert_eq!(editor.draft().system_prompt, "old prompt");
}

#[tokio::test]
async fn test_activate_failure_reports_and_keeps_state() {
    let mut backend = RecordingBackend::new(Some(sample_agent()))
        .with_versions(vec![sample_version("v-old", 1, "old prompt")]);
    backend.fail_activate = true;
    let mut editor = ConfigEditor::new("a-1").expect("valid id");
    editor.load(&backend, Some("v-old")).await.expect("load");

    let notifier = CountingNotifier::default();
    let activated = editor
        .activate(&backend, &notifier, "v-old")
        .await
        .expect("activate call");
    assert!(!activated);
    assert_eq!(notifier.error_messages(), vec![ACTIVATE_FAILURE_NOTICE]);
    assert!(editor.is_viewing_old_version());
}
