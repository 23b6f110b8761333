use serde::{Deserialize, Serialize};

/// A point-in-time copy of the process counters.
///
/// Values are not linearizable with respect to packet events; only
/// monotonicity (modulo `u32` wrap) is guaranteed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct Stats {
    pub connects: u32,
    pub announces: u32,
    pub scrapes: u32,
    pub errors: u32,
    pub dropped_announces: u32,
    pub bytes_in: u32,
    pub bytes_out: u32,
}
