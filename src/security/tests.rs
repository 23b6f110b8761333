#[cfg(test)]
mod security_tests {
    use std::net::{Ipv4Addr, SocketAddrV4};
    use crate::security::security::{generate_connection_id, secret_digest, select_worker, verify_connection_id};
    use crate::security::structs::key_rotator::KeyRotator;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::udp::structs::connection_id::ConnectionId;

    fn client_addr() -> SocketAddrV4 {
        SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, 1), 6881)
    }

    #[test]
    fn test_digest_is_deterministic_per_endpoint_and_key() {
        let key = [7u8; 16];
        let addr = client_addr();
        assert_eq!(secret_digest(&addr, &key), secret_digest(&addr, &key));
        let other_port = SocketAddrV4::new(*addr.ip(), 6882);
        assert_ne!(secret_digest(&addr, &key), secret_digest(&other_port, &key));
        let other_key = [8u8; 16];
        assert_ne!(secret_digest(&addr, &key), secret_digest(&addr, &other_key));
    }

    #[test]
    fn test_generated_cookie_verifies() {
        let rotator = KeyRotator::new();
        let keys = rotator.pair();
        let addr = client_addr();
        let id = generate_connection_id(&keys, &addr);
        assert!(verify_connection_id(&keys, id, &addr));
    }

    #[test]
    fn test_forged_cookie_rejected() {
        let rotator = KeyRotator::new();
        let keys = rotator.pair();
        assert!(!verify_connection_id(&keys, ConnectionId(0xBAD), &client_addr()));
    }

    #[test]
    fn test_cookie_rejected_for_other_endpoint() {
        let rotator = KeyRotator::new();
        let keys = rotator.pair();
        let id = generate_connection_id(&keys, &client_addr());
        let other = SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, 2), 6881);
        assert!(!verify_connection_id(&keys, id, &other));
    }

    #[test]
    fn test_cookie_survives_exactly_one_rotation() {
        let rotator = KeyRotator::new();
        let addr = client_addr();
        let id = generate_connection_id(&rotator.pair(), &addr);

        rotator.rotate();
        assert!(verify_connection_id(&rotator.pair(), id, &addr));

        rotator.rotate();
        assert!(!verify_connection_id(&rotator.pair(), id, &addr));
    }

    #[test]
    fn test_rotation_publishes_coherent_pair() {
        let rotator = KeyRotator::new();
        let before = rotator.pair();
        rotator.rotate();
        let after = rotator.pair();
        assert_eq!(after.previous, before.current);
        assert_ne!(after.current, before.current);
    }

    #[test]
    fn test_select_worker_in_range_and_stable() {
        let hash = InfoHash([0x42; 20]);
        for workers in 1..=8 {
            let selected = select_worker(&hash, workers);
            assert!(selected < workers);
            assert_eq!(selected, select_worker(&hash, workers));
        }
    }
}
