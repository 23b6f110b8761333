use crate::tracker::structs::info_hash::InfoHash;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::transaction_id::TransactionId;

/// A parsed scrape request.
///
/// Only the first info hash of a multi-hash scrape is kept; answering
/// more would bounce the request across every worker shard.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ScrapeRequest {
    pub connection_id: ConnectionId,
    pub transaction_id: TransactionId,
    pub info_hash: InfoHash,
}
