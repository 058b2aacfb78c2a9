use thiserror::Error;

/// Core error type shared across wordsmith crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A profile field violates its input rules.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
    /// The generator configuration is missing or malformed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
}

/// Convenience alias for results returned by wordsmith crates.
pub type Result<T> = std::result::Result<T, Error>;
