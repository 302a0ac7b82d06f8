//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `atelier_common` — never
//! from `crate::infra`, `crate::commands`, or `crate::output`.

use anyhow::Result;
use atelier_common::{
    Agent, AgentMetadataUpdate, AgentVersion, MarketplaceListing, NewVersionRequest,
    OwnedAgentListing, TemplateListing, VersionSummary,
};

use crate::domain::config::AtelierConfig;

// ── Agent Port Traits ─────────────────────────────────────────────────────────

/// Read access to agent records and their version history.
#[allow(async_fn_in_trait)]
pub trait AgentReader {
    /// Fetch one agent, returning `None` if it does not exist.
    async fn fetch_agent(&self, agent_id: &str) -> Result<Option<Agent>>;
    /// Fetch one historical version, returning `None` if it does not exist.
    async fn fetch_version(&self, agent_id: &str, version_id: &str)
    -> Result<Option<AgentVersion>>;
    /// List the agent's version history, newest first.
    async fn list_versions(&self, agent_id: &str) -> Result<Vec<VersionSummary>>;
}

/// Write access to agent-level metadata.
#[allow(async_fn_in_trait)]
pub trait AgentWriter {
    /// Apply a partial metadata update to the agent record.
    async fn update_agent(&self, agent_id: &str, update: &AgentMetadataUpdate) -> Result<()>;
}

/// Write access to the agent's version history.
#[allow(async_fn_in_trait)]
pub trait VersionWriter {
    /// Create a new configuration version and return the stored record.
    async fn create_version(
        &self,
        agent_id: &str,
        request: &NewVersionRequest,
    ) -> Result<AgentVersion>;
    /// Make the given version the agent's active configuration.
    async fn activate_version(&self, agent_id: &str, version_id: &str) -> Result<()>;
}

/// Read access to the listing feeds rendered as cards.
#[allow(async_fn_in_trait)]
pub trait CatalogReader {
    /// List the current user's agents.
    async fn list_agents(&self) -> Result<Vec<OwnedAgentListing>>;
    /// List published marketplace agents.
    async fn list_marketplace(&self) -> Result<Vec<MarketplaceListing>>;
    /// List the current user's templates.
    async fn list_templates(&self) -> Result<Vec<TemplateListing>>;
}

/// Composite trait — any type implementing the three agent sub-traits is an
/// `AgentBackend`.
pub trait AgentBackend: AgentReader + AgentWriter + VersionWriter {}

/// Blanket implementation for the composite trait.
impl<T> AgentBackend for T where T: AgentReader + AgentWriter + VersionWriter {}

// ── Notification Port ─────────────────────────────────────────────────────────

/// Abstracts user-facing notices so services can emit them without depending
/// on the Presentation layer. Sync trait — no async needed.
pub trait Notifier {
    /// Emit a success notice.
    fn success(&self, message: &str);
    /// Emit a failure notice.
    fn error(&self, message: &str);
    /// Emit an informational notice.
    fn info(&self, message: &str);
}

// ── Config Store Port ─────────────────────────────────────────────────────────

/// Abstracts configuration persistence (load/save).
pub trait ConfigStore {
    /// Load configuration, falling back to defaults when no file exists.
    fn load(&self) -> Result<AtelierConfig>;
    /// Persist the given configuration.
    fn save(&self, config: &AtelierConfig) -> Result<()>;
    /// Path of the backing file, for display.
    fn path(&self) -> Result<std::path::PathBuf>;
}
