//! BitTorrent peer identifier.

/// A 20-byte client-chosen peer identifier.
///
/// Distinguishes concurrent clients on the same endpoint; a re-announce
/// with a known peer ID replaces the prior entry in its swarm.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerId(pub [u8; 20]);
