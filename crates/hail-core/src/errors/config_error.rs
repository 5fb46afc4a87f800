//! Configuration errors.

use super::error_code::{self, HailErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl HailErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => error_code::CONFIG_IO,
            Self::Parse(_) => error_code::CONFIG_PARSE,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
