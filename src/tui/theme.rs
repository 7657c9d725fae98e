//! TUI style constants.
//!
//! Pure data — consumed by the rendering layer for visual consistency.
//! Palette entries themselves are colored by their own value (see
//! `color::entry_color`); these styles cover the chrome around them.

use ratatui::style::{Color, Modifier, Style};

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Cursor row in the palette list.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Input field label.
pub const STYLE_INPUT_LABEL: Style = Style::new().fg(Color::Cyan);

/// Input caret.
pub const STYLE_CARET: Style = Style::new().add_modifier(Modifier::SLOW_BLINK);

/// De-emphasized metadata (entry count).
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
