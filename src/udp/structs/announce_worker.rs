use std::sync::atomic::AtomicBool;
use parking_lot::{Condvar, Mutex};
use crate::udp::structs::worker_queue::WorkerQueue;

/// Shared handle of one announce worker thread.
///
/// The mutex guards only the queue; the swarm shard lives on the worker
/// thread's stack and is owned exclusively by it, so swarm access is
/// lock-free by construction.
pub struct AnnounceWorker {
    pub(crate) queue: Mutex<WorkerQueue>,
    pub(crate) cond: Condvar,
    pub(crate) quit: AtomicBool,
    /// Upper bound on queued messages, counted across batches.
    pub(crate) queue_limit: usize,
}
