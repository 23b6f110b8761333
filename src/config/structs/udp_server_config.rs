use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UdpServerConfig {
    pub bind_address: String,
    /// Announce worker count; 0 selects available cores minus one.
    pub worker_threads: u64,
    /// Upper bound on queued messages per worker, counted across batches.
    pub announce_queue_size: u64,
    pub receive_buffer_size: usize,
    pub send_buffer_size: usize,
    pub reuse_address: bool,
    /// Honor the ip field of announce requests instead of the source address.
    pub allow_alternate_ip: bool
}
