#[derive(Debug)]
pub enum ConfigurationError {
    IOError(std::io::Error),
    ParseError(toml::de::Error),
    SerializeError(toml::ser::Error),
    /// A default config.toml was written; the operator must edit it and
    /// start again.
    DefaultWritten,
    /// No usable config.toml and automatic creation was not requested.
    CreationRefused,
}
