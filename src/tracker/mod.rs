//! Core swarm state.
//!
//! A swarm is the set of peers exchanging one torrent, keyed by its
//! 20-byte info hash. Swarms are partitioned across announce workers by
//! hashing the info hash, and each worker owns its slice exclusively, so
//! nothing in this module is synchronized.
//!
//! # Main Components
//!
//! - `InfoHash` - 20-byte torrent identifier
//! - `PeerId` - 20-byte peer identifier
//! - `Swarm` - Per-torrent peer table: upsert, uniform peer sampling,
//!   scrape counters and stale eviction

/// Enumerations for announce events.
pub mod enums;

/// Implementation blocks for swarm state.
pub mod impls;

/// Data structures for swarms and peers.
pub mod structs;
