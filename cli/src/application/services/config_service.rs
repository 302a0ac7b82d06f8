//! Application service — configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::{AtelierConfig, validate_config_key, validate_config_value};

/// Load configuration.
pub fn load_config(store: &impl ConfigStore) -> Result<AtelierConfig> {
    store.load()
}

/// Save configuration.
pub fn save_config(store: &impl ConfigStore, config: &AtelierConfig) -> Result<()> {
    store.save(config)
}

/// Read one setting by dotted key.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn get_setting(store: &impl ConfigStore, key: &str) -> Result<String> {
    validate_config_key(key)?;
    let config = store.load()?;
    // Validated keys always resolve.
    Ok(config.get_value(key).unwrap_or_default())
}

/// Validate and persist one setting by dotted key.
///
/// # Errors
///
/// Returns an error if the key or value fails validation, or if the store
/// cannot persist the change.
pub fn set_setting(store: &impl ConfigStore, key: &str, value: &str) -> Result<()> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;
    let mut config = store.load()?;
    config.set_value(key, value);
    store.save(&config)
}
