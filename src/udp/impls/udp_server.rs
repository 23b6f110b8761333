use std::io;
use std::io::Cursor;
use std::net::{SocketAddr, SocketAddrV4};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use log::{debug, error, info};
use crate::config::structs::configuration::Configuration;
use crate::security::security::{generate_connection_id, select_worker, verify_connection_id};
use crate::security::structs::key_pair::KeyPair;
use crate::security::structs::key_rotator::KeyRotator;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::udp::enums::worker_request::WorkerRequest;
use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::structs::announce_worker::AnnounceWorker;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::packet_buffer::PacketBuffer;
use crate::udp::structs::packet_socket::PacketSocket;
use crate::udp::structs::recv_batch::RecvBatch;
use crate::udp::structs::request_header::RequestHeader;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::structs::tracker_message::TrackerMessage;
use crate::udp::structs::udp_server::UdpServer;
use crate::udp::udp::{ACTION_ANNOUNCE, ACTION_CONNECT, ACTION_SCRAPE, CONNECT_RESPONSE_SIZE, MIN_ANNOUNCE_SIZE, MIN_SCRAPE_SIZE, PROTOCOL_IDENTIFIER, RECV_BATCH_SIZE, REQUEST_HEADER_SIZE};

impl UdpServer {
    pub fn new(config: Arc<Configuration>, stats: Arc<StatsAtomics>) -> io::Result<UdpServer> {
        let bind_address: SocketAddr = config.udp_server.bind_address.parse().map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("invalid bind address: {}", config.udp_server.bind_address))
        })?;
        let socket = Arc::new(PacketSocket::bind(bind_address, &config.udp_server)?);
        let worker_count = config.worker_threads();
        let queue_limit = config.udp_server.announce_queue_size as usize;
        let workers = (0..worker_count)
            .map(|_| Arc::new(AnnounceWorker::new(queue_limit)))
            .collect();
        Ok(UdpServer {
            socket,
            workers,
            keys: Arc::new(KeyRotator::new()),
            stats,
            config,
            worker_handles: Vec::new(),
            receive_handle: None,
            rotator_handle: None,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    pub fn start(&mut self) {
        let rotation_interval = Duration::from_secs(self.config.tracker_config.key_rotation_interval);
        let keys = self.keys.clone();
        self.rotator_handle = Some(
            thread::Builder::new()
                .name("key-rotator".to_string())
                .spawn(move || keys.run(rotation_interval))
                .unwrap(),
        );

        for (index, worker) in self.workers.iter().enumerate() {
            let worker = worker.clone();
            let socket = self.socket.clone();
            let stats = self.stats.clone();
            let config = self.config.clone();
            self.worker_handles.push(
                thread::Builder::new()
                    .name(format!("announce-{index}"))
                    .spawn(move || worker.run(socket, stats, config))
                    .unwrap(),
            );
        }

        let socket = self.socket.clone();
        let workers = self.workers.clone();
        let keys = self.keys.clone();
        let stats = self.stats.clone();
        let allow_alternate_ip = self.config.udp_server.allow_alternate_ip;
        self.receive_handle = Some(
            thread::Builder::new()
                .name("receive".to_string())
                .spawn(move || UdpServer::receive_loop(socket, workers, keys, stats, allow_alternate_ip))
                .unwrap(),
        );
    }

    /// Ordered teardown: close the socket to stop the receive thread,
    /// then signal and join the workers, then the rotator. Queued work is
    /// dropped on the floor.
    pub fn shutdown(&mut self) {
        self.socket.close();
        if let Some(handle) = self.receive_handle.take() {
            let _ = handle.join();
        }
        for worker in &self.workers {
            worker.stop();
        }
        for handle in self.worker_handles.drain(..) {
            let _ = handle.join();
        }
        self.keys.stop();
        if let Some(handle) = self.rotator_handle.take() {
            let _ = handle.join();
        }
        info!("[UDP] Server stopped");
    }

    /// The receive thread body: read a batch, validate and shard each
    /// datagram, post once per worker per cycle, then flush the local
    /// packet buffer of connect responses.
    fn receive_loop(socket: Arc<PacketSocket>, workers: Vec<Arc<AnnounceWorker>>, keys: Arc<KeyRotator>, stats: Arc<StatsAtomics>, allow_alternate_ip: bool) {
        let mut batch = RecvBatch::new(RECV_BATCH_SIZE);
        let mut send_buffer = PacketBuffer::with_capacity(RECV_BATCH_SIZE);
        // per-worker pending vectors amortize queue lock acquisition to
        // one post per worker per read cycle
        let mut pending: Vec<Vec<TrackerMessage>> = (0..workers.len()).map(|_| Vec::new()).collect();

        loop {
            let received = match socket.recv_batch(&mut batch) {
                Ok(0) => {
                    if socket.is_closed() {
                        break;
                    }
                    continue;
                }
                Ok(received) => received,
                Err(error) => {
                    if socket.is_closed() {
                        break;
                    }
                    error!("[UDP] receive failed: {error}");
                    break;
                }
            };

            let key_pair = keys.pair();
            for index in 0..received {
                let (payload, from) = batch.packet(index);
                let from = match from {
                    Some(addr) => addr,
                    None => continue,
                };
                Self::incoming_packet(payload, from, &key_pair, &mut pending, &mut send_buffer, &socket, &stats, allow_alternate_ip);
            }

            for (index, messages) in pending.iter_mut().enumerate() {
                if !messages.is_empty() {
                    workers[index].post_announces(std::mem::take(messages), &stats);
                }
            }

            if !send_buffer.is_empty() {
                Self::flush_responses(&mut send_buffer, &socket, &stats);
            }
        }
    }

    /// Validates and dispatches one datagram. Connects are answered from
    /// here; announces and scrapes are parsed and placed on the pending
    /// vector of the worker owning their info hash. Invalid datagrams are
    /// dropped without a response.
    #[allow(clippy::too_many_arguments)]
    fn incoming_packet(payload: &[u8], from: SocketAddrV4, keys: &KeyPair, pending: &mut [Vec<TrackerMessage>], send_buffer: &mut PacketBuffer, socket: &PacketSocket, stats: &StatsAtomics, allow_alternate_ip: bool) {
        stats.update_stats(StatsEvent::BytesIn, payload.len() as u32);

        // too short for any header; line noise, not an error
        if payload.len() < REQUEST_HEADER_SIZE {
            return;
        }
        let header = match RequestHeader::from_bytes(payload) {
            Ok(header) => header,
            Err(_) => return,
        };

        match header.action {
            ACTION_CONNECT => {
                if header.connection_id.0 != PROTOCOL_IDENTIFIER {
                    debug!("invalid connection ID for connect message from {from}");
                    stats.update_stats(StatsEvent::Errors, 1);
                    return;
                }
                let response = ConnectResponse {
                    transaction_id: header.transaction_id,
                    connection_id: generate_connection_id(keys, &from),
                };
                let mut payload_out = [0u8; CONNECT_RESPONSE_SIZE];
                if let Err(error) = response.write(&mut Cursor::new(&mut payload_out[..])) {
                    debug!("could not write connect response: {error}");
                    return;
                }
                stats.update_stats(StatsEvent::Connects, 1);
                if send_buffer.append(&[&payload_out], from) {
                    Self::flush_responses(send_buffer, socket, stats);
                }
            }
            ACTION_ANNOUNCE => {
                if !verify_connection_id(keys, header.connection_id, &from) {
                    debug!("invalid connection ID for announce message from {from}");
                    stats.update_stats(StatsEvent::Errors, 1);
                    return;
                }
                if payload.len() < MIN_ANNOUNCE_SIZE {
                    debug!("announce packet too short ({}) from {from}", payload.len());
                    stats.update_stats(StatsEvent::Errors, 1);
                    return;
                }
                let mut request = match AnnounceRequest::from_bytes(payload) {
                    Ok(request) => request,
                    Err(_) => {
                        stats.update_stats(StatsEvent::Errors, 1);
                        return;
                    }
                };
                if !allow_alternate_ip || request.ip_address.is_unspecified() {
                    request.ip_address = *from.ip();
                }
                // keyed hash prevents crafted info-hash collisions from
                // overloading a single worker
                let worker_index = select_worker(&request.info_hash, pending.len());
                pending[worker_index].push(TrackerMessage {
                    request: WorkerRequest::Announce(request),
                    from,
                });
            }
            ACTION_SCRAPE => {
                if !verify_connection_id(keys, header.connection_id, &from) {
                    debug!("invalid connection ID for scrape message from {from}");
                    stats.update_stats(StatsEvent::Errors, 1);
                    return;
                }
                if payload.len() < MIN_SCRAPE_SIZE {
                    debug!("scrape packet too short ({}) from {from}", payload.len());
                    stats.update_stats(StatsEvent::Errors, 1);
                    return;
                }
                let request = match ScrapeRequest::from_bytes(payload) {
                    Ok(request) => request,
                    Err(_) => {
                        stats.update_stats(StatsEvent::Errors, 1);
                        return;
                    }
                };
                // scrape volume is small; any worker could answer, so a
                // cheap byte mapping is good enough
                let worker_index = request.info_hash.0[0] as usize % pending.len();
                pending[worker_index].push(TrackerMessage {
                    request: WorkerRequest::Scrape(request),
                    from,
                });
            }
            _ => {
                debug!("unknown action {} from {from}", header.action);
                stats.update_stats(StatsEvent::Errors, 1);
            }
        }
    }

    fn flush_responses(send_buffer: &mut PacketBuffer, socket: &PacketSocket, stats: &StatsAtomics) {
        match send_buffer.flush(socket) {
            Ok(bytes) => {
                if bytes > 0 {
                    stats.update_stats(StatsEvent::BytesOut, bytes as u32);
                }
            }
            Err(error) => {
                debug!("response flush failed: {error}");
            }
        }
    }
}
