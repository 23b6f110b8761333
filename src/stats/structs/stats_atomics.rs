use std::sync::atomic::AtomicU32;

#[derive(Default, Debug)]
pub struct StatsAtomics {
    pub connects: AtomicU32,
    pub announces: AtomicU32,
    pub scrapes: AtomicU32,
    pub errors: AtomicU32,
    pub dropped_announces: AtomicU32,
    pub bytes_in: AtomicU32,
    pub bytes_out: AtomicU32,
}
