//! Compose passwords from a base word and play character
//! reveal animations in the terminal.

/// Target for tracing macros.
///
/// Used so that error messages are succinct rather than
/// including the full module path.
pub const TARGET: &str = "glyphpass";

pub mod cli;
pub mod commands;
mod config;
mod error;
pub(crate) mod helpers;

pub use config::{ClipboardSettings, Config, PasswordSettings, RevealSettings};
pub use error::Error;

/// Result type for the executable.
pub type Result<T> = std::result::Result<T, error::Error>;
