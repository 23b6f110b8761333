use std::collections::HashMap;
use crate::tracker::structs::peer_entry::PeerEntry;
use crate::tracker::structs::peer_id::PeerId;

/// Per-info-hash peer table. Owned by exactly one announce worker and
/// therefore unsynchronized.
///
/// Peers are held in a hash map for replacement lookup by peer ID, with
/// an auxiliary index vector for uniform random sampling and swap-and-pop
/// removal. The two structures reference each other through the entries'
/// slot field.
///
/// Invariants: no two entries share a peer ID; `seeds` never exceeds the
/// peer count; `completed` is monotone non-decreasing.
#[derive(Default, Debug)]
pub struct Swarm {
    pub(crate) peers: HashMap<PeerId, PeerEntry>,
    pub(crate) index: Vec<PeerId>,
    pub(crate) seeds: u32,
    pub(crate) completed: u32,
}
