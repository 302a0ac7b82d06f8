//! The editable draft of an agent configuration and its dirty tracking.
//!
//! A [`Draft`] is the working copy of every field the editor can change; a
//! second `Draft` snapshot serves as the baseline for dirty comparison.
//! Initialization and comparison are pure functions so the editor can
//! recompute them at defined transition points instead of relying on an
//! implicit reactive graph.

use std::sync::LazyLock;

use atelier_common::{Agent, AgentVersion, ConfiguredMcp, CustomMcp, ToolMap};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Checked before any id is interpolated into an API path.
static AGENT_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]{0,63}$").expect("valid regex")
});

/// The editable form state.
///
/// Identity fields (name, description, default flag, avatar) are agent-level;
/// the rest are version-level. The split matters only at initialization and
/// save time; the draft itself is flat, exactly as the form edits it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Draft {
    pub name: String,
    pub description: String,
    pub system_prompt: String,
    pub tools: ToolMap,
    pub configured_mcps: Vec<ConfiguredMcp>,
    pub custom_mcps: Vec<CustomMcp>,
    pub is_default: bool,
    pub avatar: Option<String>,
    pub avatar_color: Option<String>,
}

/// A single-field draft mutation.
#[derive(Debug, Clone)]
pub enum FieldChange {
    Name(String),
    Description(String),
    SystemPrompt(String),
    Tools(ToolMap),
    IsDefault(bool),
}

impl FieldChange {
    /// Replace the named field in `draft`.
    pub fn apply(self, draft: &mut Draft) {
        match self {
            Self::Name(v) => draft.name = v,
            Self::Description(v) => draft.description = v,
            Self::SystemPrompt(v) => draft.system_prompt = v,
            Self::Tools(v) => draft.tools = v,
            Self::IsDefault(v) => draft.is_default = v,
        }
    }
}

/// Compute the initial draft for an agent, optionally pinned to a historical
/// version.
///
/// Configuration source priority: the explicit historical version, else the
/// agent's embedded current-version snapshot, else the agent record itself
/// (pre-versioning agents carry configuration inline). Identity fields always
/// come from the agent record since they are agent-level, not version-level.
#[must_use]
pub fn initial_draft(agent: &Agent, version_data: Option<&AgentVersion>) -> Draft {
    let source = version_data.or(agent.current_version.as_ref());
    let (system_prompt, tools, configured_mcps, custom_mcps) = match source {
        Some(version) => (
            version.system_prompt.clone(),
            version.tools.clone(),
            version.configured_mcps.clone(),
            version.custom_mcps.clone(),
        ),
        None => (
            agent.system_prompt.clone().unwrap_or_default(),
            agent.tools.clone(),
            agent.configured_mcps.clone(),
            agent.custom_mcps.clone(),
        ),
    };
    Draft {
        name: agent.name.clone(),
        description: agent.description.clone(),
        system_prompt,
        tools,
        configured_mcps,
        custom_mcps,
        is_default: agent.is_default,
        avatar: agent.avatar.clone(),
        avatar_color: agent.avatar_color.clone(),
    }
}

/// Serialized comparison between draft and baseline.
///
/// Compares the JSON value trees rather than the structs so that only state
/// which would actually persist counts as a change.
#[must_use]
pub fn drafts_differ(draft: &Draft, baseline: &Draft) -> bool {
    let left = serde_json::to_value(draft).unwrap_or(serde_json::Value::Null);
    let right = serde_json::to_value(baseline).unwrap_or(serde_json::Value::Null);
    left != right
}

/// Validate an agent identifier before it reaches an API path.
#[must_use]
pub fn is_valid_agent_id(id: &str) -> bool {
    AGENT_ID_RE.is_match(id)
}
