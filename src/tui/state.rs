//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space. The transition function
//! (`update`) and the rendering layer (`view`) both program against them.
//!
//! There is a single screen: the palette list above a text input. The only
//! state mutation beyond input editing is the append performed by
//! [`App::add_color`].

use crossterm::event::KeyEvent;

use crate::types::{ColorEntry, Palette};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// A single producer feeds the mpsc channel: the key reader thread.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// Owns the palette and the in-progress input. The rendering layer reads
/// this each frame; only the event loop mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// The accumulated colors, in insertion order.
    pub palette: Palette,

    /// Text typed into the add-color field, not yet committed.
    pub pending: String,

    /// Focused row in the palette list. Presentation only — never
    /// affects the palette contents.
    pub cursor: usize,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Create an App with the default seed palette and an empty input.
    pub fn new() -> Self {
        App {
            palette: Palette::seeded(),
            pending: String::new(),
            cursor: 0,
            should_quit: false,
        }
    }

    /// Commit the pending input to the palette.
    ///
    /// Empty input is a silent no-op. The input is deliberately left
    /// intact after a successful add.
    pub fn add_color(&mut self) {
        if let Some(entry) = ColorEntry::new(self.pending.as_str()) {
            self.palette.push(entry);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions; the transition function
/// decides what each Action means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a character to the pending input.
    Input(char),
    /// Remove the last character of the pending input.
    Backspace,
    /// Commit the pending input to the palette.
    Submit,
    /// Move the list cursor up.
    MoveUp,
    /// Move the list cursor down.
    MoveDown,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_has_seed_palette_and_empty_input() {
        let app = App::new();
        assert_eq!(app.palette.names(), vec!["blue", "green", "red"]);
        assert_eq!(app.pending, "");
        assert_eq!(app.cursor, 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn add_color_appends_pending_input() {
        let mut app = App::new();
        app.pending = "purple".to_string();
        app.add_color();
        assert_eq!(app.palette.names(), vec!["blue", "green", "red", "purple"]);
    }

    #[test]
    fn add_color_with_empty_input_is_a_noop() {
        let mut app = App::new();
        let before = app.palette.clone();
        app.add_color();
        assert_eq!(app.palette, before);
        assert_eq!(app.palette.len(), 3);
    }

    #[test]
    fn add_color_preserves_pending_input() {
        let mut app = App::new();
        app.pending = "teal".to_string();
        app.add_color();
        assert_eq!(app.pending, "teal");
    }
}
