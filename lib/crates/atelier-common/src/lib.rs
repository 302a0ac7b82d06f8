pub mod agent;
pub mod listing;

pub use agent::{
    Agent, AgentMetadataUpdate, AgentVersion, ConfiguredMcp, CustomMcp, NewVersionRequest,
    NormalizedCustomMcp, ToolFlag, ToolMap, VersionStatus, VersionSummary,
};
pub use listing::{
    CurrentVersionSummary, MarketplaceListing, OwnedAgentListing, TemplateListing,
};
