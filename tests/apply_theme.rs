//! End-to-end check of theme application against the full slot table.

use qutegruv::config::{
    BgColor, ColorPair, Colors, CommandColors, CompletionColors, CompletionFonts,
    CompletionItemColors, Config, FgColor, Fonts, HintColors, KeyhintColors, MessageColors,
    MessageFonts, Padding, PromptColors, SelectedTabColors, StatusbarColors, TabColors, TabFonts,
    Tabs, WebpageColors,
};
use qutegruv::{apply_to_host, Error, HostContext, Theme};

fn s(value: &str) -> String {
    value.to_string()
}

/// Every slot the gruvbox theme is documented to set, spelled out literally.
fn expected_config() -> Config {
    let font = s("11pt Iosevka");
    let font_bold = s("bold 11pt Iosevka");

    Config {
        fonts: Fonts {
            default_family: vec![s("Iosevka")],
            default_size: s("11pt"),
            completion: CompletionFonts {
                category: font_bold.clone(),
                entry: font.clone(),
            },
            hints: font_bold,
            keyhint: font.clone(),
            messages: MessageFonts {
                error: font.clone(),
                info: font.clone(),
                warning: font.clone(),
            },
            prompts: font.clone(),
            statusbar: font.clone(),
            tabs: TabFonts {
                selected: font.clone(),
                unselected: font,
            },
        },
        colors: Colors {
            tabs: TabColors {
                bar: BgColor { bg: s("#1d2021") },
                odd: ColorPair::new("#282828", "#a89984"),
                even: ColorPair::new("#282828", "#a89984"),
                selected: SelectedTabColors {
                    odd: ColorPair::new("#3c3836", "#ebdbb2"),
                    even: ColorPair::new("#3c3836", "#ebdbb2"),
                },
            },
            statusbar: StatusbarColors {
                normal: ColorPair::new("#1d2021", "#ebdbb2"),
                insert: ColorPair::new("#b8bb26", "#1d2021"),
                command: CommandColors {
                    bg: s("#fe8019"),
                    fg: s("#1d2021"),
                    private: ColorPair::new("#d3869b", "#1d2021"),
                },
                private: ColorPair::new("#d3869b", "#1d2021"),
            },
            completion: CompletionColors {
                category: ColorPair::new("#3c3836", "#ebdbb2"),
                even: BgColor { bg: s("#282828") },
                odd: BgColor { bg: s("#1d2021") },
                item: CompletionItemColors {
                    selected: ColorPair::new("#504945", "#ebdbb2"),
                },
                r#match: FgColor { fg: s("#b8bb26") },
            },
            hints: HintColors {
                bg: s("#fabd2f"),
                fg: s("#1d2021"),
                r#match: FgColor { fg: s("#8ec07c") },
            },
            keyhint: KeyhintColors {
                bg: s("#3c3836"),
                fg: s("#ebdbb2"),
            },
            messages: MessageColors {
                info: ColorPair::new("#83a598", "#1d2021"),
                warning: ColorPair::new("#fabd2f", "#1d2021"),
                error: ColorPair::new("#fb4934", "#1d2021"),
            },
            prompts: PromptColors {
                bg: s("#3c3836"),
                fg: s("#ebdbb2"),
                selected: ColorPair::new("#504945", "#ebdbb2"),
            },
            webpage: WebpageColors {
                preferred_color_scheme: s("dark"),
            },
        },
        tabs: Tabs {
            padding: Padding::new(6, 6, 4, 4),
        },
    }
}

#[test]
fn applying_gruvbox_sets_every_slot_and_nothing_else() {
    let mut config = Config::default();
    Theme::gruvbox().apply(&mut config);
    assert_eq!(config, expected_config());
}

#[test]
fn applying_twice_matches_applying_once() {
    let theme = Theme::gruvbox();
    let mut config = Config::default();
    theme.apply(&mut config);
    theme.apply(&mut config);
    assert_eq!(config, expected_config());
}

#[test]
fn missing_host_context_fails_without_mutation() {
    let mut ctx = HostContext::absent();
    let result = apply_to_host(&Theme::gruvbox(), &mut ctx);
    assert_eq!(result, Err(Error::MissingHostContext));
    assert_eq!(ctx, HostContext::absent());
}

#[test]
fn host_context_round_trip_applies_theme() {
    let mut ctx = HostContext::with_config(Config::default());
    apply_to_host(&Theme::gruvbox(), &mut ctx).unwrap();
    assert_eq!(ctx.into_config(), Some(expected_config()));
}

#[test]
fn rendered_script_matches_upstream_fragment_values() {
    let mut config = Config::default();
    Theme::gruvbox().apply(&mut config);
    let script = qutegruv::render::to_config_py(&config);

    for expected in [
        "c.colors.tabs.bar.bg = \"#1d2021\"",
        "c.colors.statusbar.command.bg = \"#fe8019\"",
        "c.colors.completion.match.fg = \"#b8bb26\"",
        "c.colors.hints.match.fg = \"#8ec07c\"",
        "c.colors.messages.error.bg = \"#fb4934\"",
        "c.colors.prompts.selected.bg = \"#504945\"",
    ] {
        assert!(script.contains(expected), "missing line: {expected}");
    }
}
