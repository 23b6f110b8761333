use crate::config::enums::configuration_error::ConfigurationError;

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigurationError::IOError(e) => e.fmt(f),
            ConfigurationError::ParseError(e) => e.fmt(f),
            ConfigurationError::SerializeError(e) => e.fmt(f),
            ConfigurationError::DefaultWritten => write!(f, "a default config.toml was written; edit it and start again"),
            ConfigurationError::CreationRefused => write!(f, "no usable config.toml and --create-config was not given")
        }
    }
}

impl std::error::Error for ConfigurationError {}
