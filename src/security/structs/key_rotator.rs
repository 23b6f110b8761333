use arc_swap::ArcSwap;
use parking_lot::{Condvar, Mutex};
use crate::security::structs::key_pair::KeyPair;

/// Sole writer of the key pair; readers load atomic snapshots.
pub struct KeyRotator {
    pub(crate) keys: ArcSwap<KeyPair>,
    pub(crate) quit: Mutex<bool>,
    pub(crate) cond: Condvar,
}
