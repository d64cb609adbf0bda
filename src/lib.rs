//! # qutegruv - Gruvbox theme for qutebrowser
//!
//! Models the slice of qutebrowser's configuration a theme touches as typed
//! nested structs, and applies the gruvbox dark palette to it.
//!
//! ## Public API
//!
//! ### Configuration model (`config`)
//! - [`Config`] - The host-owned configuration target (fonts, colors, tabs)
//! - [`Padding`] - Tab padding geometry
//!
//! ### Theme (`theme`)
//! - [`Theme`] - A [`Palette`] plus [`FontSpec`], applied via [`Theme::apply`]
//! - [`GRUVBOX`] - The gruvbox dark palette constants
//! - [`apply_to_host`] - Guarded application through a [`HostContext`]
//!
//! ### Host handoff (`host`)
//! - [`HostContext`] - The host-injected scope; absent when the host never
//!   provided a config
//!
//! ### Rendering (`render`)
//! - [`render::to_config_py`] - Emit the themed config as `config.py` lines
//!
//! ### Error handling (`error`)
//! - [`Error`] / [`Result`] - One failure mode: [`Error::MissingHostContext`]
//!
//! ## Example
//!
//! ```rust
//! use qutegruv::{apply_to_host, Config, HostContext, Theme};
//!
//! let mut ctx = HostContext::with_config(Config::default());
//! apply_to_host(&Theme::gruvbox(), &mut ctx)?;
//! # Ok::<(), qutegruv::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod render;
pub mod theme;

pub use config::{Config, Padding};
pub use error::{Error, Result};
pub use host::HostContext;
pub use theme::{apply_to_host, FontSpec, Palette, Theme, GRUVBOX, GRUVBOX_FONT};
