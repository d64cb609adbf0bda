//! Host-injected configuration context
//!
//! qutebrowser injects a config object (`c`) into the scope a theme script
//! runs in. [`HostContext`] models that handoff explicitly: the host either
//! provided a config or it didn't, and a theme must refuse to run in the
//! latter case instead of assuming the binding exists.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};

/// The execution context a host hands to a theme.
///
/// The config inside is host-owned: it exists before the theme runs and is
/// consumed by the host afterwards. The theme only ever mutates it in place.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HostContext {
    config: Option<Config>,
}

impl HostContext {
    /// A context carrying a host-provided config
    pub fn with_config(config: Config) -> Self {
        Self {
            config: Some(config),
        }
    }

    /// A context where the host never injected a config
    pub fn absent() -> Self {
        Self { config: None }
    }

    /// Borrow the config, if the host provided one
    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    /// Mutably borrow the config, failing fast when the host never
    /// provided one
    pub fn config_mut(&mut self) -> Result<&mut Config> {
        self.config.as_mut().ok_or(Error::MissingHostContext)
    }

    /// Hand the config back to the host
    pub fn into_config(self) -> Option<Config> {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_context_fails_fast() {
        let mut ctx = HostContext::absent();
        assert_eq!(ctx.config_mut().unwrap_err(), Error::MissingHostContext);
    }

    #[test]
    fn test_provided_config_is_borrowable() {
        let mut ctx = HostContext::with_config(Config::default());
        assert!(ctx.config_mut().is_ok());
        assert_eq!(ctx.into_config(), Some(Config::default()));
    }

    #[test]
    fn test_default_context_is_absent() {
        assert_eq!(HostContext::default(), HostContext::absent());
    }
}
