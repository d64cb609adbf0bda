//! Render a themed config back into qutebrowser `config.py` assignments
//!
//! qutebrowser itself consumes Python, so the useful output format for a
//! themed [`Config`] is the list of `c.<option> = <value>` lines a user
//! drops into their `config.py`.

use std::fmt::Write;

use crate::config::{ColorPair, Config};

/// Emit `c.<option> = <value>` assignment lines for every themed slot.
///
/// Deterministic: slots appear in qutebrowser's documented grouping order
/// (fonts, then colors by surface, then tab geometry).
pub fn to_config_py(config: &Config) -> String {
    let mut out = String::new();

    render_fonts(&mut out, config);
    out.push('\n');
    render_colors(&mut out, config);
    out.push('\n');

    let pad = config.tabs.padding;
    line(
        &mut out,
        "tabs.padding",
        &format!(
            "{{\"top\": {}, \"bottom\": {}, \"left\": {}, \"right\": {}}}",
            pad.top, pad.bottom, pad.left, pad.right
        ),
    );

    out
}

fn render_fonts(out: &mut String, config: &Config) {
    let fonts = &config.fonts;

    let families: Vec<String> = fonts
        .default_family
        .iter()
        .map(|family| py_str(family))
        .collect();
    line(out, "fonts.default_family", &format!("[{}]", families.join(", ")));
    line(out, "fonts.default_size", &py_str(&fonts.default_size));
    line(out, "fonts.completion.category", &py_str(&fonts.completion.category));
    line(out, "fonts.completion.entry", &py_str(&fonts.completion.entry));
    line(out, "fonts.hints", &py_str(&fonts.hints));
    line(out, "fonts.keyhint", &py_str(&fonts.keyhint));
    line(out, "fonts.messages.error", &py_str(&fonts.messages.error));
    line(out, "fonts.messages.info", &py_str(&fonts.messages.info));
    line(out, "fonts.messages.warning", &py_str(&fonts.messages.warning));
    line(out, "fonts.prompts", &py_str(&fonts.prompts));
    line(out, "fonts.statusbar", &py_str(&fonts.statusbar));
    line(out, "fonts.tabs.selected", &py_str(&fonts.tabs.selected));
    line(out, "fonts.tabs.unselected", &py_str(&fonts.tabs.unselected));
}

fn render_colors(out: &mut String, config: &Config) {
    let colors = &config.colors;

    line(out, "colors.tabs.bar.bg", &py_str(&colors.tabs.bar.bg));
    pair(out, "colors.tabs.odd", &colors.tabs.odd);
    pair(out, "colors.tabs.even", &colors.tabs.even);
    pair(out, "colors.tabs.selected.odd", &colors.tabs.selected.odd);
    pair(out, "colors.tabs.selected.even", &colors.tabs.selected.even);

    pair(out, "colors.statusbar.normal", &colors.statusbar.normal);
    pair(out, "colors.statusbar.insert", &colors.statusbar.insert);
    line(out, "colors.statusbar.command.bg", &py_str(&colors.statusbar.command.bg));
    line(out, "colors.statusbar.command.fg", &py_str(&colors.statusbar.command.fg));
    pair(out, "colors.statusbar.command.private", &colors.statusbar.command.private);
    pair(out, "colors.statusbar.private", &colors.statusbar.private);

    pair(out, "colors.completion.category", &colors.completion.category);
    line(out, "colors.completion.even.bg", &py_str(&colors.completion.even.bg));
    line(out, "colors.completion.odd.bg", &py_str(&colors.completion.odd.bg));
    pair(out, "colors.completion.item.selected", &colors.completion.item.selected);
    line(out, "colors.completion.match.fg", &py_str(&colors.completion.r#match.fg));

    line(out, "colors.hints.bg", &py_str(&colors.hints.bg));
    line(out, "colors.hints.fg", &py_str(&colors.hints.fg));
    line(out, "colors.hints.match.fg", &py_str(&colors.hints.r#match.fg));

    line(out, "colors.keyhint.bg", &py_str(&colors.keyhint.bg));
    line(out, "colors.keyhint.fg", &py_str(&colors.keyhint.fg));

    pair(out, "colors.messages.info", &colors.messages.info);
    pair(out, "colors.messages.warning", &colors.messages.warning);
    pair(out, "colors.messages.error", &colors.messages.error);

    line(out, "colors.prompts.bg", &py_str(&colors.prompts.bg));
    line(out, "colors.prompts.fg", &py_str(&colors.prompts.fg));
    pair(out, "colors.prompts.selected", &colors.prompts.selected);

    line(
        out,
        "colors.webpage.preferred_color_scheme",
        &py_str(&colors.webpage.preferred_color_scheme),
    );
}

fn pair(out: &mut String, option: &str, colors: &ColorPair) {
    line(out, &format!("{option}.bg"), &py_str(&colors.bg));
    line(out, &format!("{option}.fg"), &py_str(&colors.fg));
}

fn line(out: &mut String, option: &str, value: &str) {
    // Writing to a String cannot fail
    let _ = writeln!(out, "c.{option} = {value}");
}

fn py_str(value: &str) -> String {
    format!("\"{value}\"")
}
