use std::io;
use std::io::{Cursor, Read};
use crate::tracker::structs::info_hash::InfoHash;
use crate::udp::structs::request_header::RequestHeader;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::udp::REQUEST_HEADER_SIZE;

impl ScrapeRequest {
    /// Caller must have checked the 36-byte minimum. Extra info hashes
    /// beyond the first are silently truncated.
    pub fn from_bytes(bytes: &[u8]) -> Result<ScrapeRequest, io::Error> {
        let header = RequestHeader::from_bytes(bytes)?;

        let mut cursor = Cursor::new(bytes);
        cursor.set_position(REQUEST_HEADER_SIZE as u64);

        let mut info_hash = [0; 20];
        cursor.read_exact(&mut info_hash)?;

        Ok(ScrapeRequest {
            connection_id: header.connection_id,
            transaction_id: header.transaction_id,
            info_hash: InfoHash(info_hash),
        })
    }
}
