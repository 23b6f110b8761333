pub mod announce_event;
pub mod info_hash;
pub mod peer_id;
pub mod swarm;
