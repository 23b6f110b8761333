use std::net::SocketAddrV4;

/// Reusable receive-side buffers for one batched socket read.
///
/// Owned by the receive thread; the per-datagram scatter buffers are
/// allocated once and refilled in place on every call.
pub struct RecvBatch {
    pub(crate) buffers: Vec<Vec<u8>>,
    /// Length and source of each datagram of the last receive call.
    pub(crate) meta: Vec<(usize, Option<SocketAddrV4>)>,
    #[cfg(target_os = "linux")]
    pub(crate) iovecs: Vec<libc::iovec>,
    #[cfg(target_os = "linux")]
    pub(crate) headers: Vec<libc::mmsghdr>,
    #[cfg(target_os = "linux")]
    pub(crate) addrs: Vec<libc::sockaddr_storage>,
}
