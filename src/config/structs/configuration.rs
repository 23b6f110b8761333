use serde::{Deserialize, Serialize};
use crate::config::structs::tracker_config::TrackerConfig;
use crate::config::structs::udp_server_config::UdpServerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub tracker_config: TrackerConfig,
    pub udp_server: UdpServerConfig
}
