use std::sync::Arc;
use std::time::{Duration, Instant};
use arc_swap::ArcSwap;
use parking_lot::{Condvar, Mutex};
use crate::security::security::gen_random_key;
use crate::security::structs::key_pair::KeyPair;
use crate::security::structs::key_rotator::KeyRotator;

impl Default for KeyRotator {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyRotator {
    pub fn new() -> KeyRotator {
        KeyRotator {
            keys: ArcSwap::from_pointee(KeyPair {
                current: gen_random_key(),
                previous: gen_random_key(),
            }),
            quit: Mutex::new(false),
            cond: Condvar::new(),
        }
    }

    /// Current snapshot; coherent by construction.
    pub fn pair(&self) -> Arc<KeyPair> {
        self.keys.load_full()
    }

    pub fn rotate(&self) {
        let pair = self.keys.load();
        self.keys.store(Arc::new(KeyPair {
            current: gen_random_key(),
            previous: pair.current,
        }));
    }

    /// Rotation loop; runs on its own thread until `stop` is called.
    pub fn run(&self, interval: Duration) {
        let mut quit = self.quit.lock();
        'rotation: loop {
            if *quit {
                break;
            }
            let deadline = Instant::now() + interval;
            loop {
                let result = self.cond.wait_until(&mut quit, deadline);
                if *quit {
                    break 'rotation;
                }
                if result.timed_out() {
                    break;
                }
            }
            self.rotate();
        }
    }

    pub fn stop(&self) {
        let mut quit = self.quit.lock();
        *quit = true;
        self.cond.notify_one();
    }
}
