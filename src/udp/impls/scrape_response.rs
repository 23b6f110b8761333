use std::io;
use std::io::Write;
use byteorder::{NetworkEndian, WriteBytesExt};
use crate::udp::structs::scrape_response::ScrapeResponse;
use crate::udp::udp::ACTION_SCRAPE;

impl ScrapeResponse {
    #[inline]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        bytes.write_u32::<NetworkEndian>(ACTION_SCRAPE)?;
        bytes.write_i32::<NetworkEndian>(self.transaction_id.0)?;
        bytes.write_i32::<NetworkEndian>(self.torrent_stats.seeders.0)?;
        bytes.write_i32::<NetworkEndian>(self.torrent_stats.completed.0)?;
        bytes.write_i32::<NetworkEndian>(self.torrent_stats.leechers.0)?;
        Ok(())
    }
}
