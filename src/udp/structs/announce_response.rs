use crate::udp::structs::announce_interval::AnnounceInterval;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::transaction_id::TransactionId;

/// The fixed 20-byte announce response header. The compact peer list is
/// produced by the swarm and appended as a second gather slice, so it
/// never passes through this struct.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct AnnounceResponse {
    pub transaction_id: TransactionId,
    pub announce_interval: AnnounceInterval,
    pub leechers: NumberOfPeers,
    pub seeders: NumberOfPeers,
}
