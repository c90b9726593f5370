//! Configuration and terminal rendering for the `defi-yield` binary.

/// TOML configuration.
pub mod config;
/// Table and chart rendering.
pub mod render;
