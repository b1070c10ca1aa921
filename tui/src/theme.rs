//! Color theme and glyphs for the Maquette TUI.
//!
//! Uses the Catppuccin Mocha palette by default with an optional
//! high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use maquette_engine::UiOptions;

/// Catppuccin Mocha color constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(17, 17, 27); // crust
    pub const BG_PANEL: Color = Color::Rgb(30, 30, 46); // base
    pub const BG_HIGHLIGHT: Color = Color::Rgb(49, 50, 68); // surface0
    pub const BG_BORDER: Color = Color::Rgb(69, 71, 90); // surface1

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(205, 214, 244); // text
    pub const TEXT_SECONDARY: Color = Color::Rgb(186, 194, 222); // subtext1
    pub const TEXT_MUTED: Color = Color::Rgb(108, 112, 134); // overlay0
    pub const TEXT_DISABLED: Color = Color::Rgb(88, 91, 112); // surface2

    // === Primary/Accent ===
    pub const PRIMARY: Color = Color::Rgb(203, 166, 247); // mauve
    pub const ACCENT: Color = Color::Rgb(116, 199, 236); // sapphire

    pub const GREEN: Color = Color::Rgb(166, 227, 161);
    pub const YELLOW: Color = Color::Rgb(249, 226, 175);
    pub const PEACH: Color = Color::Rgb(250, 179, 135);
    pub const RED: Color = Color::Rgb(243, 139, 168);
    pub const BLUE: Color = Color::Rgb(137, 180, 250);
    pub const TEAL: Color = Color::Rgb(148, 226, 213);

    // === Semantic Aliases ===
    pub const SUCCESS: Color = GREEN;
    pub const WARNING: Color = YELLOW;
    pub const ERROR: Color = RED;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub green: Color,
    pub yellow: Color,
    pub peach: Color,
    pub red: Color,
    pub blue: Color,
    pub teal: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::PRIMARY,
            accent: colors::ACCENT,
            success: colors::SUCCESS,
            warning: colors::WARNING,
            error: colors::ERROR,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            peach: colors::PEACH,
            red: colors::RED,
            blue: colors::BLUE,
            teal: colors::TEAL,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            text_disabled: Color::DarkGray,
            primary: Color::White,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            green: Color::Green,
            yellow: Color::Yellow,
            peach: Color::Yellow,
            red: Color::Red,
            blue: Color::Blue,
            teal: Color::Cyan,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub user: &'static str,
    pub assistant: &'static str,
    pub image: &'static str,
    pub document: &'static str,
    pub prompt: &'static str,
    pub bullet: &'static str,
    pub selected: &'static str,
    pub toggle_on: &'static str,
    pub toggle_off: &'static str,
    pub badge: &'static str,
    pub pending: &'static str,
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
    pub track: &'static str,
    pub thumb: &'static str,
    pub spinner_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            user: "U",
            assistant: "A",
            image: "#",
            document: "=",
            prompt: ">",
            bullet: "*",
            selected: ">",
            toggle_on: "[x]",
            toggle_off: "[ ]",
            badge: "*",
            pending: "~",
            arrow_up: "^",
            arrow_down: "v",
            track: "|",
            thumb: "#",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            user: "○",
            assistant: "◇",
            image: "▣",
            document: "▤",
            prompt: "❯",
            bullet: "•",
            selected: "❯",
            toggle_on: "●on ",
            toggle_off: "○off",
            badge: "◆",
            pending: "…",
            arrow_up: "↑",
            arrow_down: "↓",
            track: "│",
            thumb: "█",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[(tick / 4) % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn user_name(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.green)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn assistant_name(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn tab_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn tab_inactive(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }
}

#[cfg(test)]
mod tests {
    use maquette_engine::UiOptions;

    use super::{glyphs, spinner_frame};

    #[test]
    fn spinner_cycles_without_reduced_motion() {
        let options = UiOptions::default();
        let frames = glyphs(options).spinner_frames;
        let mut seen = std::collections::HashSet::new();
        for tick in 0..(frames.len() * 4) {
            seen.insert(spinner_frame(tick, options));
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn spinner_static_with_reduced_motion() {
        let options = UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        };
        for tick in 0..32 {
            assert_eq!(spinner_frame(tick, options), spinner_frame(0, options));
        }
    }
}
