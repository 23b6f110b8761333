/// One coherent snapshot of the rotating secrets.
///
/// Published as a whole so a reader never observes `previous` from one
/// rotation paired with `current` from another.
#[derive(Clone, Copy, Debug)]
pub struct KeyPair {
    pub current: [u8; 16],
    pub previous: [u8; 16],
}
