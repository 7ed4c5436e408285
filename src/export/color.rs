//! Mapping configured color hints to terminal colors

use colored::Color;

/// Turns a tag's color hint (usually a hex code) into a display color.
pub trait ColorResolver {
    fn resolve(&self, hint: &str) -> Color;
}

/// Fixed hex-to-ANSI table; unknown hints render white.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPalette;

const PALETTE: [(&str, Color); 22] = [
    ("#000000", Color::Black),
    ("#800000", Color::Red),
    ("#008000", Color::Green),
    ("#808000", Color::Yellow),
    ("#000080", Color::Blue),
    ("#800080", Color::Magenta),
    ("#008080", Color::Cyan),
    ("#c0c0c0", Color::White),
    ("#808080", Color::BrightBlack),
    ("#ff0000", Color::BrightRed),
    ("#00ff00", Color::BrightGreen),
    ("#ffff00", Color::BrightYellow),
    ("#0000ff", Color::BrightBlue),
    ("#ff00ff", Color::BrightMagenta),
    ("#00ffff", Color::BrightCyan),
    ("#ffffff", Color::BrightWhite),
    ("#ff9900", Color::Yellow),
    ("#9fc5e8", Color::BrightCyan),
    ("#9900ff", Color::BrightMagenta),
    ("#1155cc", Color::BrightBlue),
    ("#6aa84f", Color::BrightGreen),
    ("#bf9000", Color::Yellow),
];

impl ColorResolver for AnsiPalette {
    fn resolve(&self, hint: &str) -> Color {
        let hint = hint.trim();
        PALETTE
            .iter()
            .find(|(hex, _)| hex.eq_ignore_ascii_case(hint))
            .map(|(_, color)| *color)
            .unwrap_or(Color::White)
    }
}
