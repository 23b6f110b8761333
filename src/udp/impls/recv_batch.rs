use std::net::SocketAddrV4;
use crate::udp::structs::recv_batch::RecvBatch;
use crate::udp::udp::MAX_PACKET_SIZE;

impl RecvBatch {
    pub fn new(capacity: usize) -> RecvBatch {
        RecvBatch {
            buffers: (0..capacity).map(|_| vec![0u8; MAX_PACKET_SIZE]).collect(),
            meta: vec![(0, None); capacity],
            #[cfg(target_os = "linux")]
            iovecs: vec![
                libc::iovec {
                    iov_base: std::ptr::null_mut(),
                    iov_len: 0
                };
                capacity
            ],
            #[cfg(target_os = "linux")]
            // SAFETY: mmsghdr is a C struct where all-zeros is a valid initial state.
            headers: vec![unsafe { std::mem::zeroed() }; capacity],
            #[cfg(target_os = "linux")]
            // SAFETY: sockaddr_storage is a C struct where all-zeros is a valid initial state.
            addrs: vec![unsafe { std::mem::zeroed() }; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffers.len()
    }

    /// Payload and source of datagram `index` from the last receive call.
    /// The source is `None` for non-IPv4 origins, which the tracker core
    /// does not serve.
    pub fn packet(&self, index: usize) -> (&[u8], Option<SocketAddrV4>) {
        let (len, from) = self.meta[index];
        (&self.buffers[index][..len], from)
    }
}
