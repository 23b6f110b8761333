pub mod info_hash;
pub mod peer_entry;
pub mod peer_id;
pub mod swarm;
pub mod swarm_stats;
