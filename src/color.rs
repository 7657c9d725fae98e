//! Color name resolution.
//!
//! Maps a stored color name to a terminal color. Ratatui's own parser
//! handles the ANSI names, `#rrggbb` hex and 0-255 indexed forms; a small
//! table on top covers common CSS keywords the ANSI set lacks ("teal",
//! "purple", "orange", ...). Anything unrecognized falls back to the
//! terminal default — entries are stored verbatim either way.

use std::str::FromStr;

use ratatui::style::Color;

use crate::types::ColorEntry;

/// CSS keywords without an ANSI equivalent, as 24-bit values.
const CSS_KEYWORDS: [(&str, Color); 16] = [
    ("aqua", Color::Rgb(0x00, 0xff, 0xff)),
    ("brown", Color::Rgb(0xa5, 0x2a, 0x2a)),
    ("coral", Color::Rgb(0xff, 0x7f, 0x50)),
    ("gold", Color::Rgb(0xff, 0xd7, 0x00)),
    ("indigo", Color::Rgb(0x4b, 0x00, 0x82)),
    ("lime", Color::Rgb(0x00, 0xff, 0x00)),
    ("maroon", Color::Rgb(0x80, 0x00, 0x00)),
    ("navy", Color::Rgb(0x00, 0x00, 0x80)),
    ("olive", Color::Rgb(0x80, 0x80, 0x00)),
    ("orange", Color::Rgb(0xff, 0xa5, 0x00)),
    ("pink", Color::Rgb(0xff, 0xc0, 0xcb)),
    ("purple", Color::Rgb(0x80, 0x00, 0x80)),
    ("salmon", Color::Rgb(0xfa, 0x80, 0x72)),
    ("silver", Color::Rgb(0xc0, 0xc0, 0xc0)),
    ("teal", Color::Rgb(0x00, 0x80, 0x80)),
    ("violet", Color::Rgb(0xee, 0x82, 0xee)),
];

/// Resolve a color name to a terminal color.
///
/// Case-insensitive. Unrecognized names resolve to [`Color::Reset`]
/// (the terminal default) rather than an error.
pub fn resolve(name: &str) -> Color {
    if let Ok(color) = Color::from_str(name) {
        return color;
    }

    let lower = name.to_ascii_lowercase();
    CSS_KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == lower)
        .map(|(_, color)| *color)
        .unwrap_or(Color::Reset)
}

/// Resolve a palette entry to its display color.
pub fn entry_color(entry: &ColorEntry) -> Color {
    resolve(entry.as_str())
}

// ============================================================================
// TESTS
// ============================================================================
