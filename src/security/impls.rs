pub mod key_rotator;
