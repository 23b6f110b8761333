/// Aggregate counters returned by a scrape.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct SwarmStats {
    pub seeds: u32,
    pub completed: u32,
    pub leechers: u32,
}
