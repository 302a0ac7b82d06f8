// lib/crates/atelier-common/src/agent.rs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Transport type applied to custom MCP servers that do not declare one.
pub const DEFAULT_MCP_TRANSPORT: &str = "sse";

/// Display name applied to custom MCP servers that do not declare one.
pub const UNNAMED_MCP: &str = "Unnamed MCP";

/// An agent record as returned by the platform API.
///
/// Identity fields (name, description, default flag, avatar styling) live on
/// the agent itself; configuration fields (system prompt, integrations, tool
/// map) live on its versions. `current_version` is the embedded snapshot of
/// the active version, when the API includes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub agent_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub avatar_color: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub download_count: Option<u64>,
    #[serde(default)]
    pub marketplace_published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current_version_id: Option<String>,
    #[serde(default)]
    pub current_version: Option<AgentVersion>,
    /// Inline configuration carried by agents created before versioning
    /// existed. Read only when no version snapshot is available.
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub configured_mcps: Vec<ConfiguredMcp>,
    #[serde(default)]
    pub custom_mcps: Vec<CustomMcp>,
    #[serde(default)]
    pub tools: ToolMap,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle status of a configuration version.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VersionStatus {
    Active,
    #[default]
    Inactive,
    Archived,
}

/// A full configuration snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentVersion {
    pub version_id: String,
    pub agent_id: String,
    pub version_number: u32,
    #[serde(default)]
    pub version_name: String,
    #[serde(default)]
    pub status: VersionStatus,
    #[serde(default)]
    pub system_prompt: String,
    #[serde(default)]
    pub configured_mcps: Vec<ConfiguredMcp>,
    #[serde(default)]
    pub custom_mcps: Vec<CustomMcp>,
    #[serde(default)]
    pub tools: ToolMap,
    pub created_at: DateTime<Utc>,
}

impl AgentVersion {
    /// Display label, e.g. `"v3"` when the version carries no name.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.version_name.is_empty() {
            format!("v{}", self.version_number)
        } else {
            self.version_name.clone()
        }
    }
}

/// Version list entry — enough to render history without the full snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionSummary {
    pub version_id: String,
    pub version_number: u32,
    #[serde(default)]
    pub version_name: String,
    #[serde(default)]
    pub status: VersionStatus,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl VersionSummary {
    /// Display label, e.g. `"v3"` when the version carries no name.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.version_name.is_empty() {
            format!("v{}", self.version_number)
        } else {
            self.version_name.clone()
        }
    }
}

/// Tool-enablement map keyed by tool identifier.
pub type ToolMap = BTreeMap<String, ToolFlag>;

/// A tool map entry.
///
/// The API historically stored either a bare boolean or a full
/// `{enabled, description}` object per tool; both shapes must deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ToolFlag {
    Enabled(bool),
    Entry {
        enabled: bool,
        #[serde(default)]
        description: String,
    },
}

impl ToolFlag {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Enabled(on) => *on,
            Self::Entry { enabled, .. } => *enabled,
        }
    }
}

/// A managed (catalog) MCP integration attached to a version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfiguredMcp {
    pub name: String,
    #[serde(rename = "type", default)]
    pub transport: Option<String>,
    #[serde(default)]
    pub config: serde_json::Value,
    #[serde(rename = "enabledTools", default)]
    pub enabled_tools: Vec<String>,
}

/// A user-supplied MCP server entry, exactly as edited.
///
/// Every field is optional because the edit form allows saving half-filled
/// entries; [`CustomMcp::normalized`] is the only path to persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomMcp {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub transport: Option<String>,
    /// Legacy field name some clients still send instead of `type`.
    #[serde(rename = "customType", default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<String>,
    #[serde(default)]
    pub config: Option<serde_json::Value>,
    /// May be malformed (non-array) in records written by old clients.
    #[serde(rename = "enabledTools", default)]
    pub enabled_tools: Option<serde_json::Value>,
}

impl CustomMcp {
    /// Coerce this entry into the shape the API accepts.
    ///
    /// Missing name becomes [`UNNAMED_MCP`], missing transport falls back to
    /// `customType` and then [`DEFAULT_MCP_TRANSPORT`], missing config
    /// becomes an empty object, and anything that is not a list of strings
    /// in `enabledTools` becomes an empty list.
    #[must_use]
    pub fn normalized(&self) -> NormalizedCustomMcp {
        let name = match self.name.as_deref() {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => UNNAMED_MCP.to_string(),
        };
        let transport = self
            .transport
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.custom_type.as_deref().filter(|t| !t.is_empty()))
            .unwrap_or(DEFAULT_MCP_TRANSPORT)
            .to_string();
        let config = match &self.config {
            Some(v) if v.is_object() => v.clone(),
            _ => serde_json::Value::Object(serde_json::Map::new()),
        };
        let enabled_tools = match &self.enabled_tools {
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(ToString::to_string))
                .collect(),
            _ => Vec::new(),
        };
        NormalizedCustomMcp {
            name,
            transport,
            config,
            enabled_tools,
        }
    }
}

/// A custom MCP entry after normalization — the wire shape for writes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedCustomMcp {
    pub name: String,
    #[serde(rename = "type")]
    pub transport: String,
    pub config: serde_json::Value,
    #[serde(rename = "enabledTools")]
    pub enabled_tools: Vec<String>,
}

/// Partial agent record for metadata updates (`PUT /agents/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentMetadataUpdate {
    pub name: String,
    pub description: String,
    pub is_default: bool,
    pub avatar: Option<String>,
    pub avatar_color: Option<String>,
}

/// Payload for creating a new configuration version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewVersionRequest {
    pub system_prompt: String,
    pub configured_mcps: Vec<ConfiguredMcp>,
    pub custom_mcps: Vec<NormalizedCustomMcp>,
    pub tools: ToolMap,
    /// Human-readable tag recorded on the version, e.g. `"Manual save"`.
    pub description: String,
}
