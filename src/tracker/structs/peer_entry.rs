use std::net::Ipv4Addr;
use std::time::Instant;

/// One peer inside a swarm.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PeerEntry {
    pub ip_address: Ipv4Addr,
    pub port: u16,
    pub updated: Instant,
    pub seeding: bool,
    /// Position of this peer's ID in the swarm's index vector.
    pub(crate) slot: usize,
}
