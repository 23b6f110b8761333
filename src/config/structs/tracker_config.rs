use serde::{Deserialize, Serialize};

/// Swarm and timing settings.
///
/// `key_rotation_interval` bounds the connection-ID validity window: a
/// cookie is accepted under the current or the previous key, so it stays
/// valid for up to two rotation periods. The interval must comfortably
/// exceed the worst-case client round-trip between connect and announce;
/// the 120 second default leaves two orders of magnitude of headroom.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerConfig {
    pub peers_timeout: u64,
    pub prune_interval: u64,
    pub key_rotation_interval: u64,
    pub announce_interval: u64,
    pub announce_interval_jitter: u64,
    pub peers_returned_default: u64,
    pub peers_returned_max: u64,
}
