//! Error types for the shell.

use std::io;

/// Errors that can end the shell or reject a configuration.
///
/// Live views never produce these for input termination, metric sampling or
/// rendering problems; those are absorbed where they happen.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Terminal or thread I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The configuration is not usable.
    #[error("config error: {0}")]
    Config(String),

    /// A theme name that is not one of `amber`, `green`, `cyan`.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// A session was run a second time.
    #[error("session already started")]
    SessionReused,
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ShellError>;
