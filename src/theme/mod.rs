//! Theme definition and application
//!
//! This module provides:
//! - `palette` — Named gruvbox color constants
//! - `fonts` — Font descriptor derivation
//! - [`Theme`] — A palette plus font spec, applied to a [`Config`]

pub mod fonts;
pub mod palette;

use tracing::debug;

use crate::config::{ColorPair, Config, Padding};
use crate::error::Result;
use crate::host::HostContext;

pub use fonts::{FontSpec, GRUVBOX_FONT};
pub use palette::{Palette, GRUVBOX};

/// A complete theme: a color palette plus the UI font.
///
/// Applying a theme overwrites a fixed set of configuration slots and
/// nothing else. Every assignment is independent, so applying twice leaves
/// the config in the same state as applying once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
    pub font: FontSpec,
}

impl Theme {
    /// The gruvbox dark theme with its stock Iosevka font
    pub const fn gruvbox() -> Self {
        Self {
            palette: GRUVBOX,
            font: GRUVBOX_FONT,
        }
    }

    /// Set every themed slot on `config` to this theme's values.
    ///
    /// Pure overwrite: slots outside the themed set are left untouched.
    pub fn apply(&self, config: &mut Config) {
        debug!(family = self.font.family, size = self.font.size, "applying theme");

        self.apply_fonts(config);
        self.apply_tab_colors(config);
        self.apply_statusbar_colors(config);
        self.apply_completion_colors(config);
        self.apply_hint_colors(config);
        self.apply_message_colors(config);
        self.apply_prompt_colors(config);

        config.colors.webpage.preferred_color_scheme = "dark".to_string();
        config.tabs.padding = Padding::new(6, 6, 4, 4);
    }

    fn apply_fonts(&self, config: &mut Config) {
        let regular = self.font.regular();
        let bold = self.font.bold();

        let fonts = &mut config.fonts;
        fonts.default_family = vec![self.font.family.to_string()];
        fonts.default_size = self.font.size.to_string();
        fonts.completion.category = bold.clone();
        fonts.completion.entry = regular.clone();
        fonts.hints = bold;
        fonts.keyhint = regular.clone();
        fonts.messages.error = regular.clone();
        fonts.messages.info = regular.clone();
        fonts.messages.warning = regular.clone();
        fonts.prompts = regular.clone();
        fonts.statusbar = regular.clone();
        fonts.tabs.selected = regular.clone();
        fonts.tabs.unselected = regular;
    }

    fn apply_tab_colors(&self, config: &mut Config) {
        let p = &self.palette;
        let tabs = &mut config.colors.tabs;
        tabs.bar.bg = p.bg_dim.to_string();
        tabs.odd = ColorPair::new(p.bg, p.fg_dim);
        tabs.even = ColorPair::new(p.bg, p.fg_dim);
        tabs.selected.odd = ColorPair::new(p.bg1, p.fg);
        tabs.selected.even = ColorPair::new(p.bg1, p.fg);
    }

    fn apply_statusbar_colors(&self, config: &mut Config) {
        let p = &self.palette;
        let statusbar = &mut config.colors.statusbar;
        statusbar.normal = ColorPair::new(p.bg_dim, p.fg);
        statusbar.insert = ColorPair::new(p.green, p.bg0);
        statusbar.command.bg = p.orange.to_string();
        statusbar.command.fg = p.bg0.to_string();
        statusbar.command.private = ColorPair::new(p.purple, p.bg0);
        statusbar.private = ColorPair::new(p.purple, p.bg0);
    }

    fn apply_completion_colors(&self, config: &mut Config) {
        let p = &self.palette;
        let completion = &mut config.colors.completion;
        completion.category = ColorPair::new(p.bg1, p.fg);
        completion.even.bg = p.bg.to_string();
        completion.odd.bg = p.bg0.to_string();
        completion.item.selected = ColorPair::new(p.bg_highlight, p.fg);
        completion.r#match.fg = p.green.to_string();
    }

    fn apply_hint_colors(&self, config: &mut Config) {
        let p = &self.palette;
        let hints = &mut config.colors.hints;
        hints.bg = p.yellow.to_string();
        hints.fg = p.bg0.to_string();
        hints.r#match.fg = p.aqua.to_string();

        config.colors.keyhint.bg = p.bg1.to_string();
        config.colors.keyhint.fg = p.fg.to_string();
    }

    fn apply_message_colors(&self, config: &mut Config) {
        let p = &self.palette;
        let messages = &mut config.colors.messages;
        messages.info = ColorPair::new(p.blue, p.bg0);
        messages.warning = ColorPair::new(p.yellow, p.bg0);
        messages.error = ColorPair::new(p.red, p.bg0);
    }

    fn apply_prompt_colors(&self, config: &mut Config) {
        let p = &self.palette;
        let prompts = &mut config.colors.prompts;
        prompts.bg = p.bg1.to_string();
        prompts.fg = p.fg.to_string();
        prompts.selected = ColorPair::new(p.bg_highlight, p.fg);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::gruvbox()
    }
}

/// Apply `theme` to the config held by a host context.
///
/// Fails with [`Error::MissingHostContext`](crate::Error::MissingHostContext)
/// before touching anything when the host never injected a config.
pub fn apply_to_host(theme: &Theme, ctx: &mut HostContext) -> Result<()> {
    let config = ctx.config_mut()?;
    theme.apply(config);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sets_tab_padding() {
        let mut config = Config::default();
        Theme::gruvbox().apply(&mut config);
        assert_eq!(config.tabs.padding, Padding::new(6, 6, 4, 4));
    }

    #[test]
    fn test_apply_sets_dark_color_scheme() {
        let mut config = Config::default();
        Theme::gruvbox().apply(&mut config);
        assert_eq!(config.colors.webpage.preferred_color_scheme, "dark");
    }

    #[test]
    fn test_apply_is_idempotent() {
        let theme = Theme::gruvbox();
        let mut once = Config::default();
        theme.apply(&mut once);

        let mut twice = once.clone();
        theme.apply(&mut twice);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_private_statusbar_variants_share_purple() {
        let mut config = Config::default();
        Theme::gruvbox().apply(&mut config);
        assert_eq!(config.colors.statusbar.private.bg, GRUVBOX.purple);
        assert_eq!(
            config.colors.statusbar.command.private,
            config.colors.statusbar.private
        );
    }

    #[test]
    fn test_selected_tabs_use_raised_background() {
        let mut config = Config::default();
        Theme::gruvbox().apply(&mut config);
        assert_eq!(config.colors.tabs.selected.odd.bg, GRUVBOX.bg1);
        assert_eq!(config.colors.tabs.selected.even.bg, GRUVBOX.bg1);
        assert_eq!(config.colors.tabs.odd.fg, GRUVBOX.fg_dim);
    }

    #[test]
    fn test_category_font_is_bold_entry_font_is_regular() {
        let mut config = Config::default();
        Theme::gruvbox().apply(&mut config);
        assert_eq!(config.fonts.completion.category, "bold 11pt Iosevka");
        assert_eq!(config.fonts.completion.entry, "11pt Iosevka");
        assert_eq!(config.fonts.hints, "bold 11pt Iosevka");
    }

    #[test]
    fn test_apply_to_host_without_config_fails() {
        let mut ctx = HostContext::absent();
        let err = apply_to_host(&Theme::gruvbox(), &mut ctx).unwrap_err();
        assert_eq!(err, crate::Error::MissingHostContext);
        assert!(ctx.config().is_none());
    }

    #[test]
    fn test_apply_to_host_with_config_succeeds() {
        let mut ctx = HostContext::with_config(Config::default());
        apply_to_host(&Theme::gruvbox(), &mut ctx).unwrap();
        let config = ctx.config().unwrap();
        assert_eq!(config.colors.hints.bg, GRUVBOX.yellow);
    }
}
