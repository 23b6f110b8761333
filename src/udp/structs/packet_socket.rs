use std::net::UdpSocket;
use std::sync::atomic::AtomicBool;

/// The UDP byte transport: batched receive and batched send over one
/// bound socket.
///
/// `close` shuts the socket down, which wakes a receive call blocked on
/// another thread; that is the only cross-thread signal the transport
/// carries.
#[derive(Debug)]
pub struct PacketSocket {
    pub(crate) socket: UdpSocket,
    pub(crate) closed: AtomicBool,
}
