// Common test utilities and fixtures

use std::net::{SocketAddr, UdpSocket};
use std::sync::Arc;
use std::time::Duration;
use swarmtrack::config::structs::configuration::Configuration;
use swarmtrack::stats::structs::stats_atomics::StatsAtomics;
use swarmtrack::udp::structs::udp_server::UdpServer;

pub const MAGIC: i64 = 0x41727101980;

/// Start a full server on a loopback ephemeral port.
pub fn start_test_server(worker_threads: u64) -> (UdpServer, Arc<StatsAtomics>, SocketAddr) {
    let mut config = Configuration::init();
    config.udp_server.bind_address = String::from("127.0.0.1:0");
    config.udp_server.worker_threads = worker_threads;
    config.udp_server.receive_buffer_size = 262144;
    config.udp_server.send_buffer_size = 262144;
    let stats = Arc::new(StatsAtomics::new());
    let mut server = UdpServer::new(Arc::new(config), stats.clone()).expect("failed to bind test server");
    let address = server.local_addr().expect("test server has no local address");
    server.start();
    (server, stats, address)
}

/// A loopback client socket with a recv timeout, so a dropped request
/// fails the test instead of hanging it.
pub fn client_socket() -> UdpSocket {
    let socket = UdpSocket::bind("127.0.0.1:0").expect("failed to bind client socket");
    socket.set_read_timeout(Some(Duration::from_secs(2))).expect("failed to set read timeout");
    socket
}

pub fn build_connect_request(transaction_id: i32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(16);
    bytes.extend_from_slice(&MAGIC.to_be_bytes());
    bytes.extend_from_slice(&0u32.to_be_bytes());
    bytes.extend_from_slice(&transaction_id.to_be_bytes());
    bytes
}

#[allow(clippy::too_many_arguments)]
pub fn build_announce_request(connection_id: i64, transaction_id: i32, info_hash: [u8; 20], peer_id: [u8; 20], left: i64, event: i32, num_want: i32, port: u16) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(98);
    bytes.extend_from_slice(&connection_id.to_be_bytes());
    bytes.extend_from_slice(&1u32.to_be_bytes());
    bytes.extend_from_slice(&transaction_id.to_be_bytes());
    bytes.extend_from_slice(&info_hash);
    bytes.extend_from_slice(&peer_id);
    bytes.extend_from_slice(&0i64.to_be_bytes());
    bytes.extend_from_slice(&left.to_be_bytes());
    bytes.extend_from_slice(&0i64.to_be_bytes());
    bytes.extend_from_slice(&event.to_be_bytes());
    bytes.extend_from_slice(&0u32.to_be_bytes());
    bytes.extend_from_slice(&0u32.to_be_bytes());
    bytes.extend_from_slice(&num_want.to_be_bytes());
    bytes.extend_from_slice(&port.to_be_bytes());
    bytes
}

pub fn build_scrape_request(connection_id: i64, transaction_id: i32, info_hash: [u8; 20]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(36);
    bytes.extend_from_slice(&connection_id.to_be_bytes());
    bytes.extend_from_slice(&2u32.to_be_bytes());
    bytes.extend_from_slice(&transaction_id.to_be_bytes());
    bytes.extend_from_slice(&info_hash);
    bytes
}

pub fn request_response(socket: &UdpSocket, server: SocketAddr, request: &[u8]) -> Vec<u8> {
    socket.send_to(request, server).expect("failed to send request");
    let mut buffer = [0u8; 2048];
    let (received, _) = socket.recv_from(&mut buffer).expect("no response from tracker");
    buffer[..received].to_vec()
}

pub fn expect_no_response(socket: &UdpSocket, server: SocketAddr, request: &[u8]) {
    socket.send_to(request, server).expect("failed to send request");
    let mut buffer = [0u8; 2048];
    match socket.recv_from(&mut buffer) {
        Ok((received, _)) => panic!("expected silence, got a {received} byte response"),
        Err(e) => {
            assert!(
                e.kind() == std::io::ErrorKind::WouldBlock || e.kind() == std::io::ErrorKind::TimedOut,
                "unexpected receive error: {e}"
            );
        }
    }
}

/// Performs the connect handshake and returns the issued connection ID.
pub fn obtain_connection_id(socket: &UdpSocket, server: SocketAddr) -> i64 {
    let response = request_response(socket, server, &build_connect_request(0x1010));
    assert_eq!(response.len(), 16);
    assert_eq!(read_u32(&response, 0), 0);
    assert_eq!(read_i32(&response, 4), 0x1010);
    read_i64(&response, 8)
}

pub fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

pub fn read_i32(bytes: &[u8], offset: usize) -> i32 {
    i32::from_be_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

pub fn read_i64(bytes: &[u8], offset: usize) -> i64 {
    i64::from_be_bytes(bytes[offset..offset + 8].try_into().unwrap())
}
