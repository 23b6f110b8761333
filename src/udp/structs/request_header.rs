use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::transaction_id::TransactionId;

/// The 16-byte prefix shared by every request.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct RequestHeader {
    pub connection_id: ConnectionId,
    pub action: u32,
    pub transaction_id: TransactionId,
}
