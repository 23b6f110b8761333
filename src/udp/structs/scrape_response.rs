use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use crate::udp::structs::transaction_id::TransactionId;

/// A single-torrent scrape response (8-byte header + 12-byte stats body).
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ScrapeResponse {
    pub transaction_id: TransactionId,
    pub torrent_stats: TorrentScrapeStatistics,
}
