use std::sync::atomic::Ordering;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics::default()
    }

    pub fn get_stats(&self) -> Stats {
        Stats {
            connects: self.connects.load(Ordering::Relaxed),
            announces: self.announces.load(Ordering::Relaxed),
            scrapes: self.scrapes.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            dropped_announces: self.dropped_announces.load(Ordering::Relaxed),
            bytes_in: self.bytes_in.load(Ordering::Relaxed),
            bytes_out: self.bytes_out.load(Ordering::Relaxed),
        }
    }

    /// Counters wrap on overflow; `fetch_add` on `AtomicU32` is already
    /// two's complement wrapping.
    #[inline]
    pub fn update_stats(&self, event: StatsEvent, value: u32) {
        match event {
            StatsEvent::Connects => {
                self.connects.fetch_add(value, Ordering::Relaxed);
            }
            StatsEvent::Announces => {
                self.announces.fetch_add(value, Ordering::Relaxed);
            }
            StatsEvent::Scrapes => {
                self.scrapes.fetch_add(value, Ordering::Relaxed);
            }
            StatsEvent::Errors => {
                self.errors.fetch_add(value, Ordering::Relaxed);
            }
            StatsEvent::DroppedAnnounces => {
                self.dropped_announces.fetch_add(value, Ordering::Relaxed);
            }
            StatsEvent::BytesIn => {
                self.bytes_in.fetch_add(value, Ordering::Relaxed);
            }
            StatsEvent::BytesOut => {
                self.bytes_out.fetch_add(value, Ordering::Relaxed);
            }
        }
    }
}
