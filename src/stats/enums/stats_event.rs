use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Each variant maps to one counter in `StatsAtomics`. Used with
/// `StatsAtomics::update_stats()` to increment counters.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub enum StatsEvent {
    Connects,
    Announces,
    Scrapes,
    Errors,
    DroppedAnnounces,
    BytesIn,
    BytesOut,
}
