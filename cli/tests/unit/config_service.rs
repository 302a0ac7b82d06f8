//! Unit tests for the configuration service.

#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use atelier_cli::application::ports::ConfigStore;
use atelier_cli::application::services::config_service;
use atelier_cli::domain::config::AtelierConfig;

// ── Mock: in-memory config store ──────────────────────────────────────────────

struct MemoryConfigStore {
    config: Mutex<AtelierConfig>,
    save_calls: Mutex<u32>,
}

impl MemoryConfigStore {
    fn new() -> Self {
        Self {
            config: Mutex::new(AtelierConfig::default()),
            save_calls: Mutex::new(0),
        }
    }

    fn save_count(&self) -> u32 {
        *self.save_calls.lock().expect("lock")
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<AtelierConfig> {
        Ok(self.config.lock().expect("lock").clone())
    }

    fn save(&self, config: &AtelierConfig) -> Result<()> {
        *self.save_calls.lock().expect("lock") += 1;
        *self.config.lock().expect("lock") = config.clone();
        Ok(())
    }

    fn path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/tmp/atelier-test/config.yaml"))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_get_setting_returns_default_value() {
    let store = MemoryConfigStore::new();
    let value = config_service::get_setting(&store, "output.format").expect("get");
    assert_eq!(value, "human");
}

#[test]
fn test_set_setting_persists_valid_value() {
    let store = MemoryConfigStore::new();
    config_service::set_setting(&store, "output.format", "json").expect("set");
    assert_eq!(store.save_count(), 1);
    let value = config_service::get_setting(&store, "output.format").expect("get");
    assert_eq!(value, "json");
}

#[test]
fn test_set_setting_rejects_unknown_key_without_saving() {
    let store = MemoryConfigStore::new();
    let err = config_service::set_setting(&store, "theme.mode", "dark").expect_err("unknown key");
    assert!(err.to_string().contains("Unknown setting"), "got: {err}");
    assert_eq!(store.save_count(), 0);
}

#[test]
fn test_set_setting_rejects_invalid_value_without_saving() {
    let store = MemoryConfigStore::new();
    let err =
        config_service::set_setting(&store, "output.format", "tsv").expect_err("invalid value");
    assert!(err.to_string().contains("Invalid value"), "got: {err}");
    assert_eq!(store.save_count(), 0);
}

#[test]
fn test_set_setting_updates_base_url() {
    let store = MemoryConfigStore::new();
    config_service::set_setting(&store, "api.base_url", "https://agents.example.com/api")
        .expect("set");
    let value = config_service::get_setting(&store, "api.base_url").expect("get");
    assert_eq!(value, "https://agents.example.com/api");
}
