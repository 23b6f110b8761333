use std::io;
use std::io::Write;
use byteorder::{NetworkEndian, WriteBytesExt};
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::udp::ACTION_CONNECT;

impl ConnectResponse {
    #[inline]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        bytes.write_u32::<NetworkEndian>(ACTION_CONNECT)?;
        bytes.write_i32::<NetworkEndian>(self.transaction_id.0)?;
        bytes.write_i64::<NetworkEndian>(self.connection_id.0)?;
        Ok(())
    }
}
