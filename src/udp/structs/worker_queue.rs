use crate::udp::structs::tracker_message::TrackerMessage;

/// The mutex-guarded part of an announce worker: queued message batches
/// and their total message count. The worker drains it by swapping the
/// whole batch vector out under the lock.
#[derive(Default, Debug)]
pub struct WorkerQueue {
    pub(crate) batches: Vec<Vec<TrackerMessage>>,
    pub(crate) size: usize,
}
