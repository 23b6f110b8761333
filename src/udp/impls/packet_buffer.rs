use std::io;
use std::net::SocketAddrV4;
use crate::udp::structs::packet_buffer::{PacketBuffer, PacketSlot};
use crate::udp::structs::packet_socket::PacketSocket;

impl PacketBuffer {
    pub fn with_capacity(max_packets: usize) -> PacketBuffer {
        PacketBuffer {
            data: Vec::with_capacity(max_packets * 64),
            slots: Vec::with_capacity(max_packets),
            max_packets,
        }
    }

    /// Queues one datagram assembled from a gather vector of slices, so
    /// a response header and its peer-list body need not be joined by the
    /// caller first. Returns true when the buffer is full and must be
    /// flushed before the next append.
    pub fn append(&mut self, slices: &[&[u8]], to: SocketAddrV4) -> bool {
        let offset = self.data.len();
        for slice in slices {
            self.data.extend_from_slice(slice);
        }
        self.slots.push(PacketSlot {
            offset,
            len: self.data.len() - offset,
            to,
        });
        self.slots.len() >= self.max_packets
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Hands all accumulated datagrams to the transport in one call and
    /// returns the bytes put on the wire. The buffer is cleared whether
    /// or not the send succeeds; send failures are never surfaced to
    /// clients.
    pub fn flush(&mut self, socket: &PacketSocket) -> io::Result<usize> {
        if self.slots.is_empty() {
            return Ok(0);
        }
        let result = socket.send_batch(&self.data, &self.slots);
        self.data.clear();
        self.slots.clear();
        result
    }
}
