use std::io;
use std::net::{SocketAddr, UdpSocket};
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(unix)]
use std::os::unix::io::AsRawFd;
use socket2::{Domain, Protocol, Socket, Type};
use crate::config::structs::udp_server_config::UdpServerConfig;
use crate::udp::structs::packet_buffer::PacketSlot;
use crate::udp::structs::packet_socket::PacketSocket;
use crate::udp::structs::recv_batch::RecvBatch;
#[cfg(target_os = "linux")]
use std::net::SocketAddrV4;
#[cfg(target_os = "linux")]
use crate::udp::udp::RECV_BATCH_SIZE;

impl PacketSocket {
    pub fn bind(bind_address: SocketAddr, config: &UdpServerConfig) -> io::Result<PacketSocket> {
        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
        socket.set_recv_buffer_size(config.receive_buffer_size)?;
        socket.set_send_buffer_size(config.send_buffer_size)?;
        socket.set_reuse_address(config.reuse_address)?;
        socket.bind(&bind_address.into())?;
        let socket: UdpSocket = socket.into();
        // without recvmmsg the receive loop polls the closed flag between
        // timed single reads
        #[cfg(not(target_os = "linux"))]
        socket.set_read_timeout(Some(std::time::Duration::from_millis(100)))?;
        Ok(PacketSocket {
            socket,
            closed: AtomicBool::new(false),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Wakes a receive call blocked on another thread; subsequent receive
    /// calls return zero packets.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
        #[cfg(unix)]
        // SAFETY: the fd stays valid for the lifetime of self; shutdown on
        // an unconnected UDP socket only interrupts blocked readers.
        unsafe {
            libc::shutdown(self.socket.as_raw_fd(), libc::SHUT_RDWR);
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Receives up to one batch of datagrams in a single recvmmsg call,
    /// blocking until at least one arrives. Returns the count received;
    /// zero after `close`.
    #[cfg(target_os = "linux")]
    pub fn recv_batch(&self, batch: &mut RecvBatch) -> io::Result<usize> {
        if self.is_closed() {
            return Ok(0);
        }
        let count = batch.capacity();
        for i in 0..count {
            batch.iovecs[i] = libc::iovec {
                iov_base: batch.buffers[i].as_mut_ptr() as *mut _,
                iov_len: batch.buffers[i].len(),
            };
            let header = &mut batch.headers[i];
            header.msg_hdr.msg_name = &mut batch.addrs[i] as *mut _ as *mut _;
            header.msg_hdr.msg_namelen = std::mem::size_of::<libc::sockaddr_storage>() as libc::socklen_t;
            header.msg_hdr.msg_iov = &mut batch.iovecs[i];
            header.msg_hdr.msg_iovlen = 1;
            header.msg_hdr.msg_control = std::ptr::null_mut();
            header.msg_hdr.msg_controllen = 0;
            header.msg_hdr.msg_flags = 0;
            header.msg_len = 0;
        }
        // SAFETY: fd is a valid socket; headers, iovecs and name pointers
        // all point into batch-owned storage that outlives the call.
        let received = unsafe {
            libc::recvmmsg(
                self.socket.as_raw_fd(),
                batch.headers.as_mut_ptr(),
                count as libc::c_uint,
                libc::MSG_WAITFORONE,
                std::ptr::null_mut(),
            )
        };
        if self.is_closed() {
            return Ok(0);
        }
        if received < 0 {
            let error = io::Error::last_os_error();
            if error.kind() == io::ErrorKind::Interrupted {
                return Ok(0);
            }
            return Err(error);
        }
        let received = received as usize;
        for i in 0..received {
            let len = batch.headers[i].msg_len as usize;
            batch.meta[i] = (len, raw_to_socket_addr_v4(&batch.addrs[i]));
        }
        Ok(received)
    }

    /// Portable fallback: one timed blocking read per call.
    #[cfg(not(target_os = "linux"))]
    pub fn recv_batch(&self, batch: &mut RecvBatch) -> io::Result<usize> {
        if self.is_closed() {
            return Ok(0);
        }
        match self.socket.recv_from(&mut batch.buffers[0]) {
            Ok((len, from)) => {
                let from = match from {
                    SocketAddr::V4(addr) => Some(addr),
                    SocketAddr::V6(_) => None,
                };
                batch.meta[0] = (len, from);
                Ok(1)
            }
            Err(e) if e.kind() == io::ErrorKind::WouldBlock
                || e.kind() == io::ErrorKind::TimedOut
                || e.kind() == io::ErrorKind::Interrupted => Ok(0),
            Err(e) => {
                if self.is_closed() {
                    Ok(0)
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Puts a buffer's worth of datagrams on the wire with as few
    /// sendmmsg calls as possible. Returns the bytes sent.
    #[cfg(target_os = "linux")]
    pub fn send_batch(&self, data: &[u8], slots: &[PacketSlot]) -> io::Result<usize> {
        if slots.is_empty() {
            return Ok(0);
        }
        let mut iovecs: Vec<libc::iovec> = Vec::with_capacity(slots.len());
        let mut addrs: Vec<libc::sockaddr_in> = Vec::with_capacity(slots.len());
        for slot in slots {
            iovecs.push(libc::iovec {
                iov_base: data[slot.offset..].as_ptr() as *mut _,
                iov_len: slot.len,
            });
            // SAFETY: sockaddr_in is a C struct where all-zeros is a valid initial state.
            let mut sin: libc::sockaddr_in = unsafe { std::mem::zeroed() };
            sin.sin_family = libc::AF_INET as libc::sa_family_t;
            sin.sin_port = slot.to.port().to_be();
            sin.sin_addr = libc::in_addr {
                s_addr: u32::from_ne_bytes(slot.to.ip().octets()),
            };
            addrs.push(sin);
        }
        let mut headers: Vec<libc::mmsghdr> = Vec::with_capacity(slots.len());
        for i in 0..slots.len() {
            // SAFETY: mmsghdr is a C struct where all-zeros is a valid initial state.
            let mut header: libc::mmsghdr = unsafe { std::mem::zeroed() };
            header.msg_hdr.msg_name = &mut addrs[i] as *mut _ as *mut _;
            header.msg_hdr.msg_namelen = std::mem::size_of::<libc::sockaddr_in>() as libc::socklen_t;
            header.msg_hdr.msg_iov = &mut iovecs[i];
            header.msg_hdr.msg_iovlen = 1;
            headers.push(header);
        }
        let mut total_bytes = 0usize;
        let mut sent_total = 0usize;
        while sent_total < headers.len() {
            let remaining = &mut headers[sent_total..];
            let vlen = std::cmp::min(remaining.len(), RECV_BATCH_SIZE) as libc::c_uint;
            // SAFETY: fd is a valid socket; headers reference iovecs and
            // addrs which stay alive and unmoved for the whole call.
            let sent = unsafe {
                libc::sendmmsg(self.socket.as_raw_fd(), remaining.as_mut_ptr(), vlen, 0)
            };
            if sent < 0 {
                let error = io::Error::last_os_error();
                if error.kind() == io::ErrorKind::Interrupted {
                    continue;
                }
                return Err(error);
            }
            if sent == 0 {
                break;
            }
            for header in remaining.iter().take(sent as usize) {
                total_bytes += header.msg_len as usize;
            }
            sent_total += sent as usize;
        }
        Ok(total_bytes)
    }

    /// Portable fallback: one send_to per datagram.
    #[cfg(not(target_os = "linux"))]
    pub fn send_batch(&self, data: &[u8], slots: &[PacketSlot]) -> io::Result<usize> {
        let mut total_bytes = 0usize;
        for slot in slots {
            let payload = &data[slot.offset..slot.offset + slot.len];
            match self.socket.send_to(payload, SocketAddr::V4(slot.to)) {
                Ok(sent) => total_bytes += sent,
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) => return Err(e),
            }
        }
        Ok(total_bytes)
    }
}

#[cfg(target_os = "linux")]
fn raw_to_socket_addr_v4(storage: &libc::sockaddr_storage) -> Option<SocketAddrV4> {
    if storage.ss_family != libc::AF_INET as libc::sa_family_t {
        return None;
    }
    let sin = storage as *const _ as *const libc::sockaddr_in;
    // SAFETY: ss_family == AF_INET guarantees the storage contains a valid
    // sockaddr_in, which is layout-compatible with sockaddr_storage.
    unsafe {
        let ip = std::net::Ipv4Addr::from(u32::from_be((*sin).sin_addr.s_addr));
        let port = u16::from_be((*sin).sin_port);
        Some(SocketAddrV4::new(ip, port))
    }
}
