//! Color palette for the gruvbox theme
//!
//! Values follow the gruvbox dark variant (https://github.com/morhetz/gruvbox)
//! as hex strings, since qutebrowser takes CSS-style color literals rather
//! than terminal color indices.

/// A fixed mapping from semantic color names to hex RGB literals.
///
/// Immutable for the process lifetime; themes hold one by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Hard background, used as contrast fg on bright surfaces
    pub bg0: &'static str,
    /// Raised background (completion categories, prompts, selected tabs)
    pub bg1: &'static str,
    /// Main background
    pub bg: &'static str,
    /// Dimmed background (tab bar, statusbar)
    pub bg_dim: &'static str,
    /// Selection highlight background
    pub bg_highlight: &'static str,
    /// Main foreground
    pub fg: &'static str,
    /// Dimmed foreground (unselected tabs)
    pub fg_dim: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub yellow: &'static str,
    pub blue: &'static str,
    pub aqua: &'static str,
    pub purple: &'static str,
    pub orange: &'static str,
}

/// The gruvbox dark palette
pub const GRUVBOX: Palette = Palette {
    bg0: "#1d2021",
    bg1: "#3c3836",
    bg: "#282828",
    bg_dim: "#1d2021",
    bg_highlight: "#504945",
    fg: "#ebdbb2",
    fg_dim: "#a89984",
    green: "#b8bb26",
    red: "#fb4934",
    yellow: "#fabd2f",
    blue: "#83a598",
    aqua: "#8ec07c",
    purple: "#d3869b",
    orange: "#fe8019",
};

impl Palette {
    /// Enumerate every entry as `(name, hex)` pairs
    pub fn entries(&self) -> [(&'static str, &'static str); 14] {
        [
            ("bg0", self.bg0),
            ("bg1", self.bg1),
            ("bg", self.bg),
            ("bg_dim", self.bg_dim),
            ("bg_highlight", self.bg_highlight),
            ("fg", self.fg),
            ("fg_dim", self.fg_dim),
            ("green", self.green),
            ("red", self.red),
            ("yellow", self.yellow),
            ("blue", self.blue),
            ("aqua", self.aqua),
            ("purple", self.purple),
            ("orange", self.orange),
        ]
    }
}
