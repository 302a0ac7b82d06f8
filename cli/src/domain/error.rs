//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`, or
//! `crate::application`. All error types implement `thiserror::Error` and
//! convert to `anyhow::Error` via the `?` operator.

use thiserror::Error;

// ── Agent errors ──────────────────────────────────────────────────────────────

/// Errors related to agent records.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Invalid agent id '{0}': must be alphanumeric with '-' or '_'")]
    InvalidId(String),
}

// ── Version errors ────────────────────────────────────────────────────────────

/// Errors related to configuration versions.
#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Version '{0}' not found for this agent.")]
    NotFound(String),
}

// ── Save errors ───────────────────────────────────────────────────────────────

/// Per-step save failure.
///
/// The save is two dependent writes; distinguishing the failed step tells
/// the user exactly what did and did not persist.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Failed to save changes: could not create a new version ({reason})")]
    CreateVersion { reason: String },

    #[error(
        "Version {version_id} was created, but updating agent details failed ({reason}). \
         Name, description, and styling changes are not saved."
    )]
    UpdateMetadata { version_id: String, reason: String },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}
