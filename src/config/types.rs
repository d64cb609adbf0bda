//! Configuration types mirroring the themed slice of qutebrowser's schema
//!
//! Defines:
//! - `Config` - The top-level configuration target a theme mutates
//! - `Fonts` - Font slots for each UI element
//! - `Colors` - Color slots grouped by UI surface
//! - `Tabs` - Tab geometry (padding)
//!
//! The nested structure follows qutebrowser's dotted option paths
//! (`colors.tabs.selected.odd.bg` becomes `colors.tabs.selected.odd.bg`
//! field access). The schema is fixed, so every path is a named field
//! rather than a string-keyed lookup.

use serde::{Deserialize, Serialize};

/// The configuration target a theme is applied to.
///
/// Owned by the host: it exists before a theme runs and is read by the host
/// afterwards. `Default` is the unthemed state with every slot empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub fonts: Fonts,

    #[serde(default)]
    pub colors: Colors,

    #[serde(default)]
    pub tabs: Tabs,
}

/// Font slots (`fonts.*`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Fonts {
    /// Font families tried in order for the `default_family` placeholder
    #[serde(default)]
    pub default_family: Vec<String>,

    /// Point size used wherever `default_size` is referenced
    #[serde(default)]
    pub default_size: String,

    #[serde(default)]
    pub completion: CompletionFonts,

    #[serde(default)]
    pub hints: String,

    #[serde(default)]
    pub keyhint: String,

    #[serde(default)]
    pub messages: MessageFonts,

    #[serde(default)]
    pub prompts: String,

    #[serde(default)]
    pub statusbar: String,

    #[serde(default)]
    pub tabs: TabFonts,
}

/// `fonts.completion.*`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CompletionFonts {
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub entry: String,
}

/// `fonts.messages.*`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MessageFonts {
    #[serde(default)]
    pub error: String,

    #[serde(default)]
    pub info: String,

    #[serde(default)]
    pub warning: String,
}

/// `fonts.tabs.*`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TabFonts {
    #[serde(default)]
    pub selected: String,

    #[serde(default)]
    pub unselected: String,
}

/// Color slots (`colors.*`), grouped by UI surface
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Colors {
    #[serde(default)]
    pub tabs: TabColors,

    #[serde(default)]
    pub statusbar: StatusbarColors,

    #[serde(default)]
    pub completion: CompletionColors,

    #[serde(default)]
    pub hints: HintColors,

    #[serde(default)]
    pub keyhint: KeyhintColors,

    #[serde(default)]
    pub messages: MessageColors,

    #[serde(default)]
    pub prompts: PromptColors,

    #[serde(default)]
    pub webpage: WebpageColors,
}

/// A background/foreground pair, the common shape of most color slots
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ColorPair {
    #[serde(default)]
    pub bg: String,

    #[serde(default)]
    pub fg: String,
}

impl ColorPair {
    pub fn new(bg: impl Into<String>, fg: impl Into<String>) -> Self {
        Self {
            bg: bg.into(),
            fg: fg.into(),
        }
    }
}

/// A background-only slot (e.g. `colors.completion.even`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BgColor {
    #[serde(default)]
    pub bg: String,
}

/// A foreground-only slot (e.g. `colors.hints.match`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FgColor {
    #[serde(default)]
    pub fg: String,
}

/// `colors.tabs.*`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TabColors {
    #[serde(default)]
    pub bar: BgColor,

    #[serde(default)]
    pub odd: ColorPair,

    #[serde(default)]
    pub even: ColorPair,

    #[serde(default)]
    pub selected: SelectedTabColors,
}

/// `colors.tabs.selected.*`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SelectedTabColors {
    #[serde(default)]
    pub odd: ColorPair,

    #[serde(default)]
    pub even: ColorPair,
}

/// `colors.statusbar.*`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StatusbarColors {
    #[serde(default)]
    pub normal: ColorPair,

    #[serde(default)]
    pub insert: ColorPair,

    #[serde(default)]
    pub command: CommandColors,

    #[serde(default)]
    pub private: ColorPair,
}

/// `colors.statusbar.command.*`
///
/// Carries its own bg/fg plus the private-browsing variant nested under it,
/// matching qutebrowser's `colors.statusbar.command.private.*` options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CommandColors {
    #[serde(default)]
    pub bg: String,

    #[serde(default)]
    pub fg: String,

    #[serde(default)]
    pub private: ColorPair,
}

/// `colors.completion.*`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CompletionColors {
    #[serde(default)]
    pub category: ColorPair,

    #[serde(default)]
    pub even: BgColor,

    #[serde(default)]
    pub odd: BgColor,

    #[serde(default)]
    pub item: CompletionItemColors,

    #[serde(default)]
    pub r#match: FgColor,
}

/// `colors.completion.item.*`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CompletionItemColors {
    #[serde(default)]
    pub selected: ColorPair,
}

/// `colors.hints.*`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HintColors {
    #[serde(default)]
    pub bg: String,

    #[serde(default)]
    pub fg: String,

    #[serde(default)]
    pub r#match: FgColor,
}

/// `colors.keyhint.*`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct KeyhintColors {
    #[serde(default)]
    pub bg: String,

    #[serde(default)]
    pub fg: String,
}

/// `colors.messages.*`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MessageColors {
    #[serde(default)]
    pub info: ColorPair,

    #[serde(default)]
    pub warning: ColorPair,

    #[serde(default)]
    pub error: ColorPair,
}

/// `colors.prompts.*`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PromptColors {
    #[serde(default)]
    pub bg: String,

    #[serde(default)]
    pub fg: String,

    #[serde(default)]
    pub selected: ColorPair,
}

/// `colors.webpage.*`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WebpageColors {
    /// "auto", "light", or "dark"
    #[serde(default)]
    pub preferred_color_scheme: String,
}

/// Tab geometry (`tabs.*`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Tabs {
    #[serde(default)]
    pub padding: Padding,
}

/// Pixel padding around tab labels (`tabs.padding`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Padding {
    #[serde(default)]
    pub top: u16,

    #[serde(default)]
    pub bottom: u16,

    #[serde(default)]
    pub left: u16,

    #[serde(default)]
    pub right: u16,
}

impl Padding {
    pub fn new(top: u16, bottom: u16, left: u16, right: u16) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}
