use std::net::SocketAddrV4;

/// Location of one queued datagram inside the buffer's arena.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PacketSlot {
    pub(crate) offset: usize,
    pub(crate) len: usize,
    pub(crate) to: SocketAddrV4,
}

/// Thread-local accumulator of outbound datagrams.
///
/// Payload bytes land in one contiguous arena; each slot records the
/// span and destination of a single datagram. Within one destination the
/// append order is preserved; across destinations there is no ordering.
/// Never shared between threads.
#[derive(Default, Debug)]
pub struct PacketBuffer {
    pub(crate) data: Vec<u8>,
    pub(crate) slots: Vec<PacketSlot>,
    pub(crate) max_packets: usize,
}
