use crate::Pattern;
use secrecy::SecretString;
use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the desired length is outside
    /// of the accepted bounds.
    #[error("password length must be between {min} and {max}, got {length}")]
    LengthOutOfBounds {
        /// Requested length.
        length: usize,
        /// Minimum accepted length.
        min: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// Error generated when the base word must be extended
    /// but no character classes are enabled.
    ///
    /// The partial password is the transformed base word.
    #[error("{pattern} pattern: no character classes are enabled, unable to extend the password")]
    NoCharacterClasses {
        /// Pattern that was being applied.
        pattern: Pattern,
        /// Best effort password built before the failure.
        partial: SecretString,
    },

    /// Error generated when a pattern name is not recognised.
    #[error("unknown password pattern '{0}'")]
    UnknownPattern(String),
}
