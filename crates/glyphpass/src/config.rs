//! Configuration loaded from a TOML file.
use crate::{Error, Result};
use etcetera::BaseStrategy;
use glyphpass_password::{LengthBounds, Pattern};
use glyphpass_reveal::StaggerProfile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file.
const CONFIG_FILE: &str = "config.toml";

/// Configuration for the executable.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Password composition settings.
    pub password: PasswordSettings,
    /// Reveal animation settings.
    pub reveal: RevealSettings,
    /// Clipboard settings.
    pub clipboard: ClipboardSettings,
}

/// Password composition settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordSettings {
    /// Smallest accepted length.
    pub min_length: usize,
    /// Largest accepted length.
    pub max_length: usize,
    /// Length used when none is given.
    pub default_length: usize,
    /// Pattern used when none is given.
    pub pattern: Pattern,
}

impl Default for PasswordSettings {
    fn default() -> Self {
        let bounds = LengthBounds::default();
        Self {
            min_length: bounds.min,
            max_length: bounds.max,
            default_length: 16,
            pattern: Pattern::default(),
        }
    }
}

impl PasswordSettings {
    /// Accepted length bounds.
    pub fn bounds(&self) -> LengthBounds {
        LengthBounds {
            min: self.min_length,
            max: self.max_length,
        }
    }
}

/// Reveal animation settings.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Raw delay between characters, for example `0.15s` or `80ms`.
    pub base_delay: Option<String>,
    /// Rules used to parse the delay.
    pub profile: StaggerProfile,
}

/// Clipboard settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardSettings {
    /// Seconds the copy confirmation stays visible.
    pub confirmation_seconds: u64,
    /// Clear copied text after this many seconds.
    pub clear_after_seconds: Option<u16>,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            confirmation_seconds: 2,
            clear_after_seconds: None,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist; otherwise the file in the
    /// user configuration directory is used when present and
    /// the defaults when it is not.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                if !tokio::fs::try_exists(path).await? {
                    return Err(Error::NoConfigFile(path.to_path_buf()));
                }
                Self::read(path).await?
            }
            None => match Self::default_path() {
                Some(path) => {
                    if tokio::fs::try_exists(&path).await? {
                        Self::read(&path).await?
                    } else {
                        Self::default()
                    }
                }
                None => Self::default(),
            },
        };

        let bounds = config.password.bounds();
        if bounds.min > bounds.max {
            return Err(Error::InvalidLengthBounds {
                min: bounds.min,
                max: bounds.max,
            });
        }
        Ok(config)
    }

    /// Path to the configuration file in the user
    /// configuration directory.
    pub fn default_path() -> Option<PathBuf> {
        match etcetera::choose_base_strategy() {
            Ok(strategy) => Some(
                strategy.config_dir().join(crate::TARGET).join(CONFIG_FILE),
            ),
            Err(e) => {
                tracing::debug!(error = ?e, "config::home_dir");
                None
            }
        }
    }

    async fn read(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "config::load");
        Ok(config)
    }
}
