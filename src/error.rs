//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Toggles and exclusions removed every candidate character.
    #[error("no characters available for password generation")]
    EmptyPool,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("cannot read seed file {}: {source}", path.display())]
    SeedSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Io(_) | Error::SeedSource { .. } => 1,
            Error::EmptyPool | Error::InvalidConfiguration { .. } | Error::Settings { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
