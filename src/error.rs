//! Error types for theme application

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while applying a theme
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The host never injected a configuration object into the context.
    ///
    /// Fatal by design: a theme cannot function without the host-provided
    /// config, so this is never retried or recovered here. It propagates to
    /// the host's own error reporting.
    #[error("qutebrowser config context missing")]
    MissingHostContext,
}

impl Error {
    /// Check if this error should halt theme application entirely
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::MissingHostContext)
    }
}
