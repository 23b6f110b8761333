use std::collections::hash_map::Entry;
use std::time::{Duration, Instant};
use rand::rngs::SmallRng;
use rand::Rng;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::peer_entry::PeerEntry;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::swarm::Swarm;
use crate::tracker::structs::swarm_stats::SwarmStats;
use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::udp::PEER_ENTRY_SIZE;

impl Swarm {
    pub fn new() -> Swarm {
        Swarm::default()
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    pub fn seeds(&self) -> u32 {
        self.seeds
    }

    pub fn leechers(&self) -> u32 {
        self.peers.len() as u32 - self.seeds
    }

    /// Applies one announce and samples a compact peer list for the
    /// response body.
    ///
    /// A `stopped` event removes the peer; anything else upserts it, with
    /// replacement keyed on the peer ID. Returns the encoded peer list
    /// (4 address + 2 port bytes per peer, network order) plus the seed
    /// and leecher counts after the update.
    pub fn announce(&mut self, now: Instant, request: &AnnounceRequest, numwant: usize, rng: &mut SmallRng) -> (Vec<u8>, u32, u32) {
        if request.event == AnnounceEvent::Stopped {
            self.remove(&request.peer_id);
        } else {
            self.upsert(now, request);
        }
        let peers = self.sample_peers(&request.peer_id, numwant, rng);
        (peers, self.seeds, self.leechers())
    }

    pub fn scrape(&self) -> SwarmStats {
        SwarmStats {
            seeds: self.seeds,
            completed: self.completed,
            leechers: self.leechers(),
        }
    }

    /// Drops peers not heard from within `timeout`.
    pub fn purge_stale(&mut self, now: Instant, timeout: Duration) {
        let mut position = 0;
        while position < self.index.len() {
            let peer_id = self.index[position];
            let stale = match self.peers.get(&peer_id) {
                Some(entry) => now.saturating_duration_since(entry.updated) > timeout,
                None => true,
            };
            if stale {
                self.remove(&peer_id);
            } else {
                position += 1;
            }
        }
    }

    fn upsert(&mut self, now: Instant, request: &AnnounceRequest) {
        let seeding = request.bytes_left.0 == 0;
        match self.peers.entry(request.peer_id) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                if !entry.seeding && seeding {
                    self.seeds += 1;
                    self.completed = self.completed.wrapping_add(1);
                } else if entry.seeding && !seeding {
                    self.seeds -= 1;
                }
                entry.ip_address = request.ip_address;
                entry.port = request.port.0;
                entry.updated = now;
                entry.seeding = seeding;
            }
            Entry::Vacant(vacant) => {
                vacant.insert(PeerEntry {
                    ip_address: request.ip_address,
                    port: request.port.0,
                    updated: now,
                    seeding,
                    slot: self.index.len(),
                });
                self.index.push(request.peer_id);
                if seeding {
                    self.seeds += 1;
                }
            }
        }
    }

    fn remove(&mut self, peer_id: &PeerId) {
        if let Some(entry) = self.peers.remove(peer_id) {
            if entry.seeding {
                self.seeds -= 1;
            }
            let slot = entry.slot;
            self.index.swap_remove(slot);
            if slot < self.index.len() {
                let moved = self.index[slot];
                if let Some(moved_entry) = self.peers.get_mut(&moved) {
                    moved_entry.slot = slot;
                }
            }
        }
    }

    /// Uniform sampling without replacement via a partial Fisher-Yates
    /// shuffle of the index vector. Peer order within the swarm carries
    /// no meaning, so the shuffled prefix can stay in place. Cost is
    /// O(numwant), independent of swarm size.
    fn sample_peers(&mut self, announcer: &PeerId, numwant: usize, rng: &mut SmallRng) -> Vec<u8> {
        let eligible = self.peers.len() - usize::from(self.peers.contains_key(announcer));
        let want = numwant.min(eligible);
        let mut peers = Vec::with_capacity(want * PEER_ENTRY_SIZE);
        let mut picked = 0;
        let mut cursor = 0;
        while picked < want && cursor < self.index.len() {
            let target = rng.gen_range(cursor..self.index.len());
            self.swap_index(cursor, target);
            let peer_id = self.index[cursor];
            cursor += 1;
            if peer_id == *announcer {
                continue;
            }
            if let Some(entry) = self.peers.get(&peer_id) {
                peers.extend_from_slice(&entry.ip_address.octets());
                peers.extend_from_slice(&entry.port.to_be_bytes());
                picked += 1;
            }
        }
        peers
    }

    /// Index swaps must keep the entries' slot fields in sync.
    fn swap_index(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.index.swap(a, b);
        let id_a = self.index[a];
        let id_b = self.index[b];
        if let Some(entry) = self.peers.get_mut(&id_a) {
            entry.slot = a;
        }
        if let Some(entry) = self.peers.get_mut(&id_b) {
            entry.slot = b;
        }
    }
}
