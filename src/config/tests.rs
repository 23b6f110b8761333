#[cfg(test)]
mod config_tests {
    use crate::config::structs::configuration::Configuration;

    #[test]
    fn test_default_configuration_values() {
        let config = Configuration::init();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.tracker_config.peers_timeout, 1800);
        assert_eq!(config.tracker_config.prune_interval, 10);
        assert_eq!(config.tracker_config.key_rotation_interval, 120);
        assert_eq!(config.tracker_config.announce_interval, 1680);
        assert_eq!(config.tracker_config.announce_interval_jitter, 240);
        assert_eq!(config.tracker_config.peers_returned_default, 50);
        assert_eq!(config.tracker_config.peers_returned_max, 200);
        assert_eq!(config.udp_server.bind_address, "0.0.0.0:6969");
        assert_eq!(config.udp_server.announce_queue_size, 4096);
    }

    #[test]
    fn test_worker_threads_auto_resolves_nonzero() {
        let config = Configuration::init();
        assert!(config.worker_threads() >= 1);
    }

    #[test]
    fn test_worker_threads_explicit() {
        let mut config = Configuration::init();
        config.udp_server.worker_threads = 3;
        assert_eq!(config.worker_threads(), 3);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Configuration::init();
        let serialized = toml::to_string(&config).unwrap();
        let parsed = Configuration::load(serialized.as_bytes()).unwrap();
        assert_eq!(parsed.udp_server.bind_address, config.udp_server.bind_address);
        assert_eq!(parsed.tracker_config.peers_timeout, config.tracker_config.peers_timeout);
        assert_eq!(parsed.udp_server.allow_alternate_ip, config.udp_server.allow_alternate_ip);
    }

    #[test]
    fn test_load_rejects_garbage() {
        assert!(Configuration::load(b"not valid { toml").is_err());
    }
}
