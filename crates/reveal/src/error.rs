use thiserror::Error;

/// Errors generated by the reveal library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a stagger profile name is not recognised.
    #[error("unknown stagger profile '{0}', expected 'standard' or 'legacy'")]
    UnknownProfile(String),

    /// Error generated when a scheduled reveal task panicked.
    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),
}
