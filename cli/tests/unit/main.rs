//! Unit tests for atelier CLI
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod config_service;
mod editor_service;
mod property_tests;
