use std::collections::BTreeMap;
use std::io::Cursor;
use std::ops::Bound;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use log::debug;
use parking_lot::{Condvar, Mutex};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use crate::config::structs::configuration::Configuration;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::swarm::Swarm;
use crate::udp::enums::worker_request::WorkerRequest;
use crate::udp::structs::announce_interval::AnnounceInterval;
use crate::udp::structs::announce_response::AnnounceResponse;
use crate::udp::structs::announce_worker::AnnounceWorker;
use crate::udp::structs::number_of_downloads::NumberOfDownloads;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::packet_buffer::PacketBuffer;
use crate::udp::structs::packet_socket::PacketSocket;
use crate::udp::structs::scrape_response::ScrapeResponse;
use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use crate::udp::structs::tracker_message::TrackerMessage;
use crate::udp::structs::worker_queue::WorkerQueue;
use crate::udp::udp::{ANNOUNCE_RESPONSE_HEADER_SIZE, RECV_BATCH_SIZE, SCRAPE_RESPONSE_SIZE, SWARMS_PER_PRUNE};

impl AnnounceWorker {
    pub fn new(queue_limit: usize) -> AnnounceWorker {
        AnnounceWorker {
            queue: Mutex::new(WorkerQueue::default()),
            cond: Condvar::new(),
            quit: AtomicBool::new(false),
            queue_limit,
        }
    }

    /// Called by the receive thread with one batch of parsed messages.
    ///
    /// Non-blocking backpressure: a full queue drops the whole incoming
    /// batch and charges it to `dropped_announces`. The condition variable
    /// is only signalled on the empty-to-nonempty transition; a woken
    /// worker swaps out the entire queue, so further signals while work is
    /// pending would be wasted.
    pub fn post_announces(&self, batch: Vec<TrackerMessage>, stats: &StatsAtomics) {
        if batch.is_empty() {
            return;
        }
        let mut queue = self.queue.lock();
        if queue.size >= self.queue_limit {
            drop(queue);
            stats.update_stats(StatsEvent::DroppedAnnounces, batch.len() as u32);
            return;
        }
        queue.size += batch.len();
        let first_insert = queue.batches.is_empty();
        queue.batches.push(batch);
        drop(queue);
        if first_insert {
            self.cond.notify_one();
        }
    }

    pub fn stop(&self) {
        self.quit.store(true, Ordering::Release);
        self.cond.notify_one();
    }

    /// The worker thread body. Owns this worker's slice of the swarm
    /// table for its whole lifetime.
    pub fn run(&self, socket: Arc<PacketSocket>, stats: Arc<StatsAtomics>, config: Arc<Configuration>) {
        let tracker_config = &config.tracker_config;
        let peer_timeout = Duration::from_secs(tracker_config.peers_timeout);
        let prune_interval = Duration::from_secs(tracker_config.prune_interval);
        let numwant_default = tracker_config.peers_returned_default as usize;
        let numwant_max = tracker_config.peers_returned_max as usize;
        let interval_base = tracker_config.announce_interval as i32;
        let interval_jitter = tracker_config.announce_interval_jitter as i32;

        let mut rng = SmallRng::from_entropy();
        let mut swarms: BTreeMap<InfoHash, Swarm> = BTreeMap::new();
        let mut purge_cursor: Option<InfoHash> = None;
        // the shared queue is swapped into this vector and drained
        // without holding the mutex
        let mut drained: Vec<Vec<TrackerMessage>> = Vec::new();
        let mut send_buffer = PacketBuffer::with_capacity(RECV_BATCH_SIZE);
        let mut next_prune = Instant::now() + prune_interval;

        loop {
            {
                let mut queue = self.queue.lock();
                while queue.batches.is_empty()
                    && !self.quit.load(Ordering::Acquire)
                    && Instant::now() < next_prune
                {
                    self.cond.wait_until(&mut queue, next_prune);
                }
                if self.quit.load(Ordering::Acquire) {
                    break;
                }
                std::mem::swap(&mut queue.batches, &mut drained);
                queue.size = 0;
            }

            let now = Instant::now();
            if now >= next_prune {
                next_prune = now + prune_interval;
                purge_cursor = Self::prune_swarms(&mut swarms, purge_cursor, now, peer_timeout);
            }

            for batch in drained.iter() {
                for message in batch.iter() {
                    match &message.request {
                        WorkerRequest::Announce(request) => {
                            let swarm = swarms.entry(request.info_hash).or_insert_with(Swarm::new);
                            let numwant = effective_numwant(request.peers_wanted.0, numwant_default, numwant_max);
                            let (peers, seeds, leechers) = swarm.announce(now, request, numwant, &mut rng);

                            stats.update_stats(StatsEvent::Announces, 1);

                            let response = AnnounceResponse {
                                transaction_id: request.transaction_id,
                                announce_interval: AnnounceInterval(interval_base + rng.gen_range(0..=interval_jitter)),
                                leechers: NumberOfPeers(leechers as i32),
                                seeders: NumberOfPeers(seeds as i32),
                            };
                            let mut header = [0u8; ANNOUNCE_RESPONSE_HEADER_SIZE];
                            if let Err(error) = response.write(&mut Cursor::new(&mut header[..])) {
                                debug!("could not write announce response: {error}");
                                continue;
                            }
                            // header and peer list go out as a 2-slice gather
                            if send_buffer.append(&[&header, &peers], message.from) {
                                Self::flush_responses(&mut send_buffer, &socket, &stats);
                            }
                        }
                        WorkerRequest::Scrape(request) => {
                            stats.update_stats(StatsEvent::Scrapes, 1);

                            // scrapes never create a swarm
                            let swarm_stats = swarms.get(&request.info_hash).map(Swarm::scrape).unwrap_or_default();
                            let response = ScrapeResponse {
                                transaction_id: request.transaction_id,
                                torrent_stats: TorrentScrapeStatistics {
                                    seeders: NumberOfPeers(swarm_stats.seeds as i32),
                                    completed: NumberOfDownloads(swarm_stats.completed as i32),
                                    leechers: NumberOfPeers(swarm_stats.leechers as i32),
                                },
                            };
                            let mut payload = [0u8; SCRAPE_RESPONSE_SIZE];
                            if let Err(error) = response.write(&mut Cursor::new(&mut payload[..])) {
                                debug!("could not write scrape response: {error}");
                                continue;
                            }
                            if send_buffer.append(&[&payload], message.from) {
                                Self::flush_responses(&mut send_buffer, &socket, &stats);
                            }
                        }
                    }
                }
            }
            drained.clear();
            Self::flush_responses(&mut send_buffer, &socket, &stats);
        }
    }

    /// Evicts stale peers from up to `SWARMS_PER_PRUNE` swarms, resuming
    /// at the round-robin cursor and wrapping at the table end. Swarms
    /// left empty are destroyed. Returns the new cursor.
    fn prune_swarms(swarms: &mut BTreeMap<InfoHash, Swarm>, cursor: Option<InfoHash>, now: Instant, peer_timeout: Duration) -> Option<InfoHash> {
        if swarms.is_empty() {
            return None;
        }
        let count = std::cmp::min(swarms.len(), SWARMS_PER_PRUNE);
        let mut selected: Vec<InfoHash> = Vec::with_capacity(count);
        if let Some(position) = cursor {
            selected.extend(
                swarms
                    .range((Bound::Excluded(position), Bound::Unbounded))
                    .map(|(info_hash, _)| *info_hash)
                    .take(count),
            );
        }
        if selected.len() < count {
            let remaining = count - selected.len();
            selected.extend(swarms.keys().copied().take(remaining));
        }

        let mut last = cursor;
        for info_hash in selected {
            if let Some(swarm) = swarms.get_mut(&info_hash) {
                swarm.purge_stale(now, peer_timeout);
                if swarm.is_empty() {
                    swarms.remove(&info_hash);
                }
            }
            last = Some(info_hash);
        }
        last
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

/// Zero or negative numwant falls back to the tracker default; anything
/// else is clamped to the configured ceiling.
fn effective_numwant(wanted: i32, default: usize, ceiling: usize) -> usize {
    if wanted <= 0 {
        default
    } else {
        std::cmp::min(wanted as usize, ceiling)
    }
}
