//! Application services — use-case orchestration over the port traits.

pub mod config_service;
pub mod editor;
