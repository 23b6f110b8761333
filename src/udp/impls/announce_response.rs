use std::io;
use std::io::Write;
use byteorder::{NetworkEndian, WriteBytesExt};
use crate::udp::structs::announce_response::AnnounceResponse;
use crate::udp::udp::ACTION_ANNOUNCE;

impl AnnounceResponse {
    #[inline]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        bytes.write_u32::<NetworkEndian>(ACTION_ANNOUNCE)?;
        bytes.write_i32::<NetworkEndian>(self.transaction_id.0)?;
        bytes.write_i32::<NetworkEndian>(self.announce_interval.0)?;
        bytes.write_i32::<NetworkEndian>(self.leechers.0)?;
        bytes.write_i32::<NetworkEndian>(self.seeders.0)?;
        Ok(())
    }
}
