//! Configuration management module.
//!
//! This module handles loading, parsing and validating the tracker
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **tracker_config**: Swarm and timing settings (peer timeout, prune
//!   cadence, key rotation, announce interval and jitter, numwant bounds)
//! - **udp_server**: The UDP listener (bind address, worker count, queue
//!   bound, socket buffer sizes)
//!
//! # Features
//!
//! - TOML file parsing with detailed error messages
//! - Default value generation via `--create-config`

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;
