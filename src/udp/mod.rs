//! UDP tracker protocol implementation (BEP 15).
//!
//! # Protocol Overview
//!
//! The UDP tracker protocol uses a connection-oriented approach:
//! 1. Client sends a connect request
//! 2. Server responds with a connection ID
//! 3. Client uses connection ID for announce/scrape requests
//!
//! # Message Types
//!
//! - **Connect** (action=0): Establish connection, get connection ID
//! - **Announce** (action=1): Register peer, get peer list
//! - **Scrape** (action=2): Query torrent statistics
//!
//! # Pipeline
//!
//! One receive thread pulls datagrams off the socket in batches of up to
//! 1024, answers connects directly and shards announces/scrapes to worker
//! threads by info hash. Each worker drains its bounded queue in bulk,
//! mutates its own slice of the swarm table and batches responses into a
//! packet buffer that is flushed to the socket in one call.
//!
//! Invalid requests are never answered; this keeps the tracker useless as
//! a reflection amplifier.

/// Enumerations for worker-bound requests.
pub mod enums;

/// Implementation blocks for UDP packet handling.
pub mod impls;

/// Data structures for UDP protocol messages and the pipeline.
pub mod structs;

/// Protocol constants and service startup.
#[allow(clippy::module_inception)]
pub mod udp;
