//! Application layer — use-case orchestration behind port traits.
//!
//! Services hold the editor's state transitions and talk to the outside world
//! only through the traits in [`ports`]. This module never imports from
//! `crate::infra`, `crate::commands`, or `crate::output`.

pub mod ports;
pub mod services;
