use std::process::exit;
use std::sync::Arc;
use log::{error, info};
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::udp::structs::udp_server::UdpServer;

/// Magic constant clients must present in the connection-ID field of a
/// connect request (0x41727101980).
pub const PROTOCOL_IDENTIFIER: i64 = 4_497_486_125_440;

pub const ACTION_CONNECT: u32 = 0;
pub const ACTION_ANNOUNCE: u32 = 1;
pub const ACTION_SCRAPE: u32 = 2;

pub const MAX_PACKET_SIZE: usize = 1496;
/// Datagrams pulled off the socket per receive call.
pub const RECV_BATCH_SIZE: usize = 1024;

pub const REQUEST_HEADER_SIZE: usize = 16;
/// The protocol mandates 100 bytes, but widespread clients omit the
/// trailing two-byte extension field.
pub const MIN_ANNOUNCE_SIZE: usize = 98;
pub const MIN_SCRAPE_SIZE: usize = 36;

pub const CONNECT_RESPONSE_SIZE: usize = 16;
pub const ANNOUNCE_RESPONSE_HEADER_SIZE: usize = 20;
pub const SCRAPE_RESPONSE_SIZE: usize = 20;
pub const PEER_ENTRY_SIZE: usize = 6;

/// Swarms visited per prune tick, bounding maintenance work per worker.
pub const SWARMS_PER_PRUNE: usize = 20;

pub fn udp_service(config: Arc<Configuration>, stats: Arc<StatsAtomics>) -> UdpServer {
    let mut udp_server = UdpServer::new(config.clone(), stats).unwrap_or_else(|e| {
        error!("Could not listen to the UDP port: {e}");
        exit(1);
    });
    udp_server.start();
    info!("[UDP] Starting a server listener on {} with {} announce workers", config.udp_server.bind_address, config.worker_threads());
    udp_server
}
