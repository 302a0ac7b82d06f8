//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::net`. All functions are
//! synchronous and take data in, returning data out.

pub mod card;
pub mod config;
pub mod draft;
pub mod error;
pub mod style;

#[allow(unused_imports)]
pub use card::{AgentCard, Badge, CardAction, CardFace, TagLine};
#[allow(unused_imports)]
pub use config::{AtelierConfig, validate_config_key, validate_config_value};
#[allow(unused_imports)]
pub use draft::{Draft, FieldChange, drafts_differ, initial_draft, is_valid_agent_id};
#[allow(unused_imports)]
pub use error::{AgentError, ConfigError, SaveError, VersionError};
#[allow(unused_imports)]
pub use style::AvatarStyle;
