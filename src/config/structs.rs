pub mod configuration;
pub mod tracker_config;
pub mod udp_server_config;
