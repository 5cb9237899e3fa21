use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("config file {0} does not exist")]
    NoConfigFile(PathBuf),

    #[error("minimum password length {min} is greater than the maximum {max}")]
    InvalidLengthBounds { min: usize, max: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Password(#[from] glyphpass_password::Error),

    #[error(transparent)]
    Reveal(#[from] glyphpass_reveal::Error),

    #[error(transparent)]
    Clipboard(#[from] glyphpass_clipboard::Error),
}
