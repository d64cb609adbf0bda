//! Typed model of the qutebrowser configuration slots a theme touches

pub mod types;

pub use types::{
    BgColor, ColorPair, Colors, CommandColors, CompletionColors, CompletionFonts,
    CompletionItemColors, Config, FgColor, Fonts, HintColors, KeyhintColors, MessageColors,
    MessageFonts, Padding, PromptColors, SelectedTabColors, StatusbarColors, TabColors, TabFonts,
    Tabs, WebpageColors,
};
