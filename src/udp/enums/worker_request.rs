use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::structs::scrape_request::ScrapeRequest;

/// The two request kinds announce workers handle. Connects never reach a
/// worker; the receive thread answers them directly.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum WorkerRequest {
    Announce(AnnounceRequest),
    Scrape(ScrapeRequest),
}
