//! Color styling for SportsTracker terminal output.
//!
//! Uses the Ayu Dark palette. Color source:
//! <https://github.com/ayu-theme/ayu-colors>
//!
//! Only messages that need attention (errors, warnings) get strong colors;
//! everything else stays close to plain text.

use owo_colors::OwoColorize;
use st_core::SpeedMode;

use crate::terminal::supports_color;

// ---------------------------------------------------------------------------
// Ayu Dark color palette (RGB values)
// ---------------------------------------------------------------------------

const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - bright yellow
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178 - bright red
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 - muted gray
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - bright blue

const SPEED_MODE_PACE: (u8, u8, u8) = (0xd2, 0xa6, 0xff); // #d2a6ff - purple

pub const ICON_WARN: &str = "\u{26A0}";
pub const ICON_FAIL: &str = "\u{2716}";
pub const ICON_INFO: &str = "\u{2139}";

pub const SEPARATOR_LIGHT: &str = "\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}";

fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

pub fn render_warn(s: &str) -> String {
    color_str(s, WARN)
}

pub fn render_fail(s: &str) -> String {
    color_str(s, FAIL)
}

pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

/// Renders text in bold.
pub fn render_bold(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

pub fn render_separator() -> String {
    render_muted(SEPARATOR_LIGHT)
}

pub fn render_warn_icon() -> String {
    color_str(ICON_WARN, WARN)
}

pub fn render_fail_icon() -> String {
    color_str(ICON_FAIL, FAIL)
}

pub fn render_info_icon() -> String {
    color_str(ICON_INFO, ACCENT)
}

/// Renders a speed mode name; pace is highlighted so mixed lists stand out.
pub fn render_speed_mode(mode: SpeedMode) -> String {
    match mode {
        SpeedMode::Speed => mode.as_str().to_string(),
        SpeedMode::Pace => color_str(mode.as_str(), SPEED_MODE_PACE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Color output depends on the environment; only the visible text is
    // checked here.

    #[test]
    fn rendered_text_contains_input() {
        assert!(render_fail("bad").contains("bad"));
        assert!(render_muted("note").contains("note"));
        assert!(render_bold("Edit Note").contains("Edit Note"));
    }

    #[test]
    fn speed_mode_names() {
        assert!(render_speed_mode(SpeedMode::Pace).contains("pace"));
        assert_eq!(render_speed_mode(SpeedMode::Speed), "speed");
    }
}
