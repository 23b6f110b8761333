use std::hash::Hasher;
use std::net::SocketAddrV4;
use rand::rngs::OsRng;
use rand::RngCore;
use siphasher::sip::SipHasher24;
use crate::security::structs::key_pair::KeyPair;
use crate::tracker::structs::info_hash::InfoHash;
use crate::udp::structs::connection_id::ConnectionId;

/// Fixed key for spreading info hashes across announce workers. The
/// keyed hash stops an adversary from crafting colliding info hashes
/// that overload a single worker.
pub const WORKER_SELECT_KEY: [u8; 16] = *b"swarmtrack.shard";

/// Key material must come from the OS; worker RNGs elsewhere do not.
pub fn gen_random_key() -> [u8; 16] {
    let mut key = [0u8; 16];
    OsRng.fill_bytes(&mut key);
    key
}

/// Digest of the client endpoint under one secret key.
///
/// The hashed input is the 4 address bytes followed by the 2 port bytes,
/// both in their on-wire order.
pub fn secret_digest(from: &SocketAddrV4, key: &[u8; 16]) -> i64 {
    let mut endpoint = [0u8; 6];
    endpoint[..4].copy_from_slice(&from.ip().octets());
    endpoint[4..].copy_from_slice(&from.port().to_be_bytes());
    let mut hasher = SipHasher24::new_with_key(key);
    hasher.write(&endpoint);
    hasher.finish() as i64
}

pub fn generate_connection_id(keys: &KeyPair, from: &SocketAddrV4) -> ConnectionId {
    ConnectionId(secret_digest(from, &keys.current))
}

/// Both digests are computed before comparing, so acceptance under the
/// previous key takes the same time as under the current one.
pub fn verify_connection_id(keys: &KeyPair, connection_id: ConnectionId, from: &SocketAddrV4) -> bool {
    let current = secret_digest(from, &keys.current);
    let previous = secret_digest(from, &keys.previous);
    (connection_id.0 == current) | (connection_id.0 == previous)
}

pub fn select_worker(info_hash: &InfoHash, worker_count: usize) -> usize {
    let mut hasher = SipHasher24::new_with_key(&WORKER_SELECT_KEY);
    hasher.write(&info_hash.0);
    (hasher.finish() % worker_count as u64) as usize
}
