// lib/crates/atelier-common/src/listing.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Compact reference to an agent's active version, as embedded in listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentVersionSummary {
    pub version_id: String,
    pub version_name: String,
    pub version_number: u32,
}

/// An agent published to the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketplaceListing {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub avatar_color: Option<String>,
    /// Set for first-party listings curated by the platform team.
    #[serde(default)]
    pub is_official: bool,
    #[serde(default)]
    pub download_count: u64,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A reusable agent template owned by the current user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateListing {
    pub template_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub avatar_color: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub download_count: Option<u64>,
    pub created_at: DateTime<Utc>,
}

/// An agent owned by the current user, as shown on the agents page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedAgentListing {
    pub agent_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub avatar_color: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub download_count: Option<u64>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current_version: Option<CurrentVersionSummary>,
    pub created_at: DateTime<Utc>,
}
