use std::sync::Arc;
use std::thread::JoinHandle;
use crate::config::structs::configuration::Configuration;
use crate::security::structs::key_rotator::KeyRotator;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::udp::structs::announce_worker::AnnounceWorker;
use crate::udp::structs::packet_socket::PacketSocket;

pub struct UdpServer {
    pub(crate) socket: Arc<PacketSocket>,
    pub(crate) workers: Vec<Arc<AnnounceWorker>>,
    pub(crate) keys: Arc<KeyRotator>,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) config: Arc<Configuration>,
    pub(crate) worker_handles: Vec<JoinHandle<()>>,
    pub(crate) receive_handle: Option<JoinHandle<()>>,
    pub(crate) rotator_handle: Option<JoinHandle<()>>,
}
