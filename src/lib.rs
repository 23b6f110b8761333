//! # Swarmtrack
//!
//! A minimal, high-throughput UDP BitTorrent tracker.
//!
//! ## Overview
//!
//! Swarmtrack serves the three UDP tracker actions (connect, announce,
//! scrape) from an in-memory swarm index, with no persistence, no HTTP
//! surface and no authentication. The design goal is raw per-core packet
//! throughput: requests are sharded across announce workers by info hash,
//! so swarm state is owned by exactly one thread and never locked.
//!
//! ## Architecture
//!
//! - One receive thread reads datagrams in batches, validates connection
//!   cookies and hands parsed announce/scrape messages to the worker that
//!   owns the target info hash.
//! - `W` announce workers each own a disjoint slice of the swarm table,
//!   drain a bounded queue, mutate swarms and batch their responses.
//! - A key rotator refreshes the connection-ID secret on a fixed cadence;
//!   cookies stay valid across exactly one rotation.
//!
//! ## Modules
//!
//! - [`common`] - Shared byte wrappers and hex helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`security`] - Rotating secret keys and the connection-ID oracle
//! - [`stats`] - Process-wide event counters
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Swarm state: peer tables, sampling, eviction
//! - [`udp`] - Wire protocol, batch transport and the worker pipeline

/// Common utilities and shared functionality.
///
/// Contains the byte-count wrapper and the hex helpers used across all
/// modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing and validating configuration from TOML files,
/// including default value generation via `--create-config`.
pub mod config;

/// Logging setup.
///
/// Builds the fern dispatcher from the configured log level.
pub mod logging;

/// Connection-ID secrets and request authentication.
///
/// Implements the rotating 16-byte key pair and the siphash-based
/// connection-ID oracle used to reject spoofed announce traffic.
pub mod security;

/// Statistics tracking module.
///
/// Process-wide monotone event counters with relaxed atomic updates and
/// a snapshot type for periodic console reporting.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Core swarm state module.
///
/// Contains the per-info-hash peer table with upsert, uniform peer
/// sampling, scrape aggregation and stale-peer eviction.
pub mod tracker;

/// UDP tracker protocol implementation (BEP 15).
///
/// Wire codec, batched socket transport, the announce worker pipeline and
/// server wiring.
pub mod udp;
