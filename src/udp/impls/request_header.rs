use std::io;
use std::io::Cursor;
use byteorder::{NetworkEndian, ReadBytesExt};
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::request_header::RequestHeader;
use crate::udp::structs::transaction_id::TransactionId;

impl RequestHeader {
    /// Caller must have checked for at least 16 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<RequestHeader, io::Error> {
        let mut cursor = Cursor::new(bytes);
        let connection_id = cursor.read_i64::<NetworkEndian>()?;
        let action = cursor.read_u32::<NetworkEndian>()?;
        let transaction_id = cursor.read_i32::<NetworkEndian>()?;
        Ok(RequestHeader {
            connection_id: ConnectionId(connection_id),
            action,
            transaction_id: TransactionId(transaction_id),
        })
    }
}
