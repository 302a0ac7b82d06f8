//! Application service — the agent configuration editor state machine.
//!
//! Owns the local draft of an agent's editable fields, tracks dirty state
//! against a loaded baseline, and coordinates the two dependent remote writes
//! (create version, then update agent metadata) behind one logical save.
//!
//! All derived state (`dirty`, `viewing_old_version`, tab forcing) is
//! recomputed by explicit calls at defined transition points, never by a
//! background subscription, so ordering is deterministic and testable.

use anyhow::Result;
use atelier_common::{
    Agent, AgentMetadataUpdate, AgentVersion, ConfiguredMcp, CustomMcp, NewVersionRequest,
};

use crate::application::ports::{AgentReader, AgentWriter, Notifier, VersionWriter};
use crate::domain::draft::{Draft, FieldChange, drafts_differ, initial_draft, is_valid_agent_id};
use crate::domain::error::{AgentError, SaveError, VersionError};
use crate::domain::style::{self, AvatarStyle};

// ── Notices ───────────────────────────────────────────────────────────────────

pub const SAVE_SUCCESS_NOTICE: &str = "Changes saved successfully";
pub const OLD_VERSION_NOTICE: &str =
    "Cannot edit old versions. Please activate this version first to make changes.";
pub const ACTIVATE_SUCCESS_NOTICE: &str = "Version activated successfully";
pub const ACTIVATE_FAILURE_NOTICE: &str = "Failed to activate version";

/// Description tag stamped on versions created by a full save.
pub const MANUAL_SAVE_TAG: &str = "Manual save";
/// Description tag stamped on versions created by the snapshot side entry.
pub const SNAPSHOT_TAG: &str = "Manual snapshot";

// ── Outcome types ─────────────────────────────────────────────────────────────

/// Which editor tab is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Builder,
    Configuration,
}

/// Result of a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Ready,
    NotFound,
}

/// What a successful save persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub version_id: String,
    pub version_name: String,
}

/// Per-step result of a save attempt.
///
/// `Skipped` means the preconditions were not met and nothing was written;
/// `Failed` names the step that failed, so callers know whether a version
/// was left behind.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved(SaveReport),
    Skipped,
    Failed(SaveError),
}

// ── Editor ────────────────────────────────────────────────────────────────────

/// The editor state machine for one agent.
#[derive(Debug)]
pub struct ConfigEditor {
    agent_id: String,
    agent: Option<Agent>,
    version_data: Option<AgentVersion>,
    viewing_old_version: bool,
    draft: Draft,
    baseline: Draft,
    dirty: bool,
    is_saving: bool,
    is_activating: bool,
    active_tab: Tab,
}

impl ConfigEditor {
    /// Create an editor for `agent_id`. No remote calls happen until
    /// [`ConfigEditor::load`].
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidId`] when the id fails validation.
    pub fn new(agent_id: &str) -> Result<Self> {
        if !is_valid_agent_id(agent_id) {
            return Err(AgentError::InvalidId(agent_id.to_string()).into());
        }
        Ok(Self {
            agent_id: agent_id.to_string(),
            agent: None,
            version_data: None,
            viewing_old_version: false,
            draft: Draft::default(),
            baseline: Draft::default(),
            dirty: false,
            is_saving: false,
            is_activating: false,
            active_tab: Tab::default(),
        })
    }

    // ── Loading ───────────────────────────────────────────────────────────────

    /// Load the agent record and, optionally, one historical version, then
    /// reinitialize draft and baseline from the result.
    ///
    /// Any unsaved draft is discarded. The read-only flag is derived here:
    /// viewing an old version means a version was explicitly requested and it
    /// is not the agent's active one.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::NotFound`] when a requested version does not
    /// exist, or the transport error from the reader.
    pub async fn load(
        &mut self,
        reader: &impl AgentReader,
        version_id: Option<&str>,
    ) -> Result<LoadOutcome> {
        let Some(agent) = reader.fetch_agent(&self.agent_id).await? else {
            return Ok(LoadOutcome::NotFound);
        };

        let version_data = match version_id {
            Some(vid) => match reader.fetch_version(&self.agent_id, vid).await? {
                Some(version) => Some(version),
                None => return Err(VersionError::NotFound(vid.to_string()).into()),
            },
            None => None,
        };

        self.viewing_old_version = match &version_data {
            Some(version) => agent.current_version_id.as_deref() != Some(&version.version_id),
            None => false,
        };

        self.draft = initial_draft(&agent, version_data.as_ref());
        self.baseline = self.draft.clone();
        self.dirty = false;
        self.agent = Some(agent);
        self.version_data = version_data;
        self.sync_tab();
        Ok(LoadOutcome::Ready)
    }

    // ── Field mutation ────────────────────────────────────────────────────────

    /// Apply a single-field change to the draft. Returns `false` (with a
    /// rejection notice) when the editor is read-only.
    pub fn set_field(&mut self, notifier: &impl Notifier, change: FieldChange) -> bool {
        if self.reject_if_read_only(notifier) {
            return false;
        }
        change.apply(&mut self.draft);
        self.recompute_dirty();
        true
    }

    /// Replace both integration lists in the draft.
    pub fn set_integrations(
        &mut self,
        notifier: &impl Notifier,
        configured: Vec<ConfiguredMcp>,
        custom: Vec<CustomMcp>,
    ) -> bool {
        if self.reject_if_read_only(notifier) {
            return false;
        }
        self.draft.configured_mcps = configured;
        self.draft.custom_mcps = custom;
        self.recompute_dirty();
        true
    }

    /// Replace the avatar styling in the draft.
    pub fn set_style(
        &mut self,
        notifier: &impl Notifier,
        avatar: Option<String>,
        avatar_color: Option<String>,
    ) -> bool {
        if self.reject_if_read_only(notifier) {
            return false;
        }
        self.draft.avatar = avatar;
        self.draft.avatar_color = avatar_color;
        self.recompute_dirty();
        true
    }

    fn reject_if_read_only(&self, notifier: &impl Notifier) -> bool {
        if self.viewing_old_version {
            notifier.error(OLD_VERSION_NOTICE);
            return true;
        }
        false
    }

    fn recompute_dirty(&mut self) {
        self.dirty = drafts_differ(&self.draft, &self.baseline);
    }

    // ── Saving ────────────────────────────────────────────────────────────────

    /// Persist the draft: create a version carrying the configuration fields,
    /// then update the agent's metadata fields.
    ///
    /// The two writes are sequential and dependent; metadata is only written
    /// once the version exists. On full success the baseline is promoted. On
    /// a step-2 failure the created version stays in place (inactive), the
    /// baseline is not promoted, and the outcome names it.
    pub async fn save(
        &mut self,
        backend: &(impl VersionWriter + AgentWriter),
        notifier: &impl Notifier,
    ) -> SaveOutcome {
        if self.agent.is_none() || self.viewing_old_version || self.is_saving {
            return SaveOutcome::Skipped;
        }
        self.is_saving = true;
        let outcome = self.save_inner(backend).await;
        self.is_saving = false;

        match outcome {
            Ok(report) => {
                self.baseline = self.draft.clone();
                self.dirty = false;
                notifier.success(SAVE_SUCCESS_NOTICE);
                SaveOutcome::Saved(report)
            }
            Err(err) => {
                notifier.error(&err.to_string());
                SaveOutcome::Failed(err)
            }
        }
    }

    async fn save_inner(
        &mut self,
        backend: &(impl VersionWriter + AgentWriter),
    ) -> std::result::Result<SaveReport, SaveError> {
        let version = backend
            .create_version(&self.agent_id, &self.version_request(MANUAL_SAVE_TAG))
            .await
            .map_err(|err| SaveError::CreateVersion {
                reason: err.to_string(),
            })?;

        let update = AgentMetadataUpdate {
            name: self.draft.name.clone(),
            description: self.draft.description.clone(),
            is_default: self.draft.is_default,
            avatar: self.draft.avatar.clone(),
            avatar_color: self.draft.avatar_color.clone(),
        };
        backend
            .update_agent(&self.agent_id, &update)
            .await
            .map_err(|err| SaveError::UpdateMetadata {
                version_id: version.version_id.clone(),
                reason: err.to_string(),
            })?;

        Ok(SaveReport {
            version_name: version.display_name(),
            version_id: version.version_id,
        })
    }

    /// Version-only save side entry: create a version from the draft without
    /// touching agent metadata. Promotes the baseline on success.
    pub async fn snapshot(
        &mut self,
        writer: &impl VersionWriter,
        notifier: &impl Notifier,
        label: Option<&str>,
    ) -> SaveOutcome {
        if self.agent.is_none() || self.viewing_old_version || self.is_saving {
            return SaveOutcome::Skipped;
        }
        self.is_saving = true;
        // A blank label is the same as no label.
        let label = label
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(SNAPSHOT_TAG);
        let request = self.version_request(label);
        let result = writer.create_version(&self.agent_id, &request).await;
        self.is_saving = false;

        match result {
            Ok(version) => {
                self.baseline = self.draft.clone();
                self.dirty = false;
                let report = SaveReport {
                    version_name: version.display_name(),
                    version_id: version.version_id,
                };
                notifier.success(&format!("Created version {}", report.version_name));
                SaveOutcome::Saved(report)
            }
            Err(err) => {
                let err = SaveError::CreateVersion {
                    reason: err.to_string(),
                };
                notifier.error(&err.to_string());
                SaveOutcome::Failed(err)
            }
        }
    }

    fn version_request(&self, description: &str) -> NewVersionRequest {
        NewVersionRequest {
            system_prompt: self.draft.system_prompt.clone(),
            configured_mcps: self.draft.configured_mcps.clone(),
            custom_mcps: self
                .draft
                .custom_mcps
                .iter()
                .map(CustomMcp::normalized)
                .collect(),
            tools: self.draft.tools.clone(),
            description: description.to_string(),
        }
    }

    // ── Activation ────────────────────────────────────────────────────────────

    /// Make `version_id` the agent's active configuration, then reload the
    /// canonical (version-less) view.
    ///
    /// Returns `Ok(true)` on success, `Ok(false)` when activation was skipped
    /// or rejected by the backend.
    ///
    /// # Errors
    ///
    /// Returns an error only when the post-activation reload fails.
    pub async fn activate(
        &mut self,
        backend: &(impl VersionWriter + AgentReader),
        notifier: &impl Notifier,
        version_id: &str,
    ) -> Result<bool> {
        if self.is_activating {
            return Ok(false);
        }
        self.is_activating = true;
        let result = backend.activate_version(&self.agent_id, version_id).await;
        self.is_activating = false;

        if result.is_err() {
            notifier.error(ACTIVATE_FAILURE_NOTICE);
            return Ok(false);
        }
        notifier.success(ACTIVATE_SUCCESS_NOTICE);
        // Leave the pinned-version view for the canonical one.
        self.load(backend, None).await?;
        Ok(true)
    }

    // ── Tabs ──────────────────────────────────────────────────────────────────

    /// Switch tabs, honoring the read-only rule: the builder tab is not
    /// reachable while viewing an old version.
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.sync_tab();
    }

    fn sync_tab(&mut self) {
        if self.viewing_old_version && self.active_tab == Tab::Builder {
            self.active_tab = Tab::Configuration;
        }
    }

    // ── Read-only views ───────────────────────────────────────────────────────

    /// The field values presentation should render.
    ///
    /// While viewing an old version this is the historical snapshot merged
    /// with the agent's identity fields, never the draft, so concurrent
    /// unsaved edits cannot leak into the historical view.
    #[must_use]
    pub fn display_data(&self) -> Draft {
        match (&self.agent, &self.version_data) {
            (Some(agent), Some(version)) if self.viewing_old_version => {
                initial_draft(agent, Some(version))
            }
            _ => self.draft.clone(),
        }
    }

    /// The avatar style presentation should render.
    #[must_use]
    pub fn current_style(&self) -> AvatarStyle {
        let display = self.display_data();
        style::resolve(
            display.avatar.as_deref(),
            display.avatar_color.as_deref(),
            &self.agent_id,
        )
    }

    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn agent(&self) -> Option<&Agent> {
        self.agent.as_ref()
    }

    #[must_use]
    pub fn version_data(&self) -> Option<&AgentVersion> {
        self.version_data.as_ref()
    }

    #[must_use]
    pub fn is_viewing_old_version(&self) -> bool {
        self.viewing_old_version
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }
}
