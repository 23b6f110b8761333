use std::fs::File;
use std::io::Write;
use std::thread::available_parallelism;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::config::structs::udp_server_config::UdpServerConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                peers_timeout: 1800,
                prune_interval: 10,
                key_rotation_interval: 120,
                announce_interval: 1680,
                announce_interval_jitter: 240,
                peers_returned_default: 50,
                peers_returned_max: 200,
            },
            udp_server: UdpServerConfig {
                bind_address: String::from("0.0.0.0:6969"),
                worker_threads: 0,
                announce_queue_size: 4096,
                receive_buffer_size: 4 * 1024 * 1024,
                send_buffer_size: 4 * 1024 * 1024,
                reuse_address: true,
                allow_alternate_ip: false,
            }
        }
    }

    /// Announce worker count, resolving the 0 = auto setting.
    pub fn worker_threads(&self) -> usize {
        if self.udp_server.worker_threads > 0 {
            return self.udp_server.worker_threads as usize;
        }
        let cores = available_parallelism().map(|n| n.get()).unwrap_or(2);
        std::cmp::max(cores.saturating_sub(1), 1)
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, ConfigurationError> {
        match Configuration::load_file("config.toml") {
            Ok(config) => Ok(config),
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own config.toml file, or start this app using '--create-config' as parameter.");
                    return Err(ConfigurationError::CreationRefused);
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init()).map_err(ConfigurationError::SerializeError)?;
                match Configuration::save_file("config.toml", config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit the config.TOML in the root folder, exiting now...");
                        Err(ConfigurationError::DefaultWritten)
                    }
                    Err(e) => {
                        eprintln!("config.toml file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(e)
                    }
                }
            }
        }
    }
}
