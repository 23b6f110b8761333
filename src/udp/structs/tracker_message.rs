use std::net::SocketAddrV4;
use crate::udp::enums::worker_request::WorkerRequest;

/// One parsed request on its way to an announce worker, paired with the
/// source address the response goes back to.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct TrackerMessage {
    pub request: WorkerRequest,
    pub from: SocketAddrV4,
}
