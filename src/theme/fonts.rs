//! Font descriptor derivation
//!
//! qutebrowser font options take Qt-style font strings of the form
//! `[bold] <size> <family>`. A `FontSpec` holds the two literal inputs and
//! derives both weights from them.

/// A font family and point size, from which UI font strings are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    pub family: &'static str,
    pub size: &'static str,
}

impl FontSpec {
    pub const fn new(family: &'static str, size: &'static str) -> Self {
        Self { family, size }
    }

    /// Regular-weight font string, e.g. `"11pt Iosevka"`
    pub fn regular(&self) -> String {
        format!("{} {}", self.size, self.family)
    }

    /// Bold-weight font string, e.g. `"bold 11pt Iosevka"`
    pub fn bold(&self) -> String {
        format!("bold {} {}", self.size, self.family)
    }
}

/// The font used by the gruvbox theme
pub const GRUVBOX_FONT: FontSpec = FontSpec::new("Iosevka", "11pt");
