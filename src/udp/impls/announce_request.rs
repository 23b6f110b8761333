use std::io;
use std::io::{Cursor, Read};
use std::net::Ipv4Addr;
use byteorder::{NetworkEndian, ReadBytesExt};
use crate::common::structs::number_of_bytes::NumberOfBytes;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::peer_key::PeerKey;
use crate::udp::structs::port::Port;
use crate::udp::structs::request_header::RequestHeader;
use crate::udp::udp::REQUEST_HEADER_SIZE;

impl AnnounceRequest {
    /// Caller must have checked the 98-byte minimum; a trailing two-byte
    /// extension field, when present, is ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<AnnounceRequest, io::Error> {
        let header = RequestHeader::from_bytes(bytes)?;

        let mut cursor = Cursor::new(bytes);
        cursor.set_position(REQUEST_HEADER_SIZE as u64);

        let mut info_hash = [0; 20];
        let mut peer_id = [0; 20];
        let mut ip = [0; 4];

        cursor.read_exact(&mut info_hash)?;
        cursor.read_exact(&mut peer_id)?;

        let bytes_downloaded = cursor.read_i64::<NetworkEndian>()?;
        let bytes_left = cursor.read_i64::<NetworkEndian>()?;
        let bytes_uploaded = cursor.read_i64::<NetworkEndian>()?;
        let event = cursor.read_i32::<NetworkEndian>()?;

        cursor.read_exact(&mut ip)?;

        let key = cursor.read_u32::<NetworkEndian>()?;
        let peers_wanted = cursor.read_i32::<NetworkEndian>()?;
        let port = cursor.read_u16::<NetworkEndian>()?;

        Ok(AnnounceRequest {
            connection_id: header.connection_id,
            transaction_id: header.transaction_id,
            info_hash: InfoHash(info_hash),
            peer_id: PeerId(peer_id),
            bytes_downloaded: NumberOfBytes(bytes_downloaded),
            bytes_uploaded: NumberOfBytes(bytes_uploaded),
            bytes_left: NumberOfBytes(bytes_left),
            event: AnnounceEvent::from_i32(event),
            ip_address: Ipv4Addr::from(ip),
            key: PeerKey(key),
            peers_wanted: NumberOfPeers(peers_wanted),
            port: Port(port),
        })
    }
}
