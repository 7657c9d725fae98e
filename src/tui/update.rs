//! Pure state transitions: (App, Action) → App.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Unhandled combinations leave the state unchanged (no-op).

use super::state::{Action, App};

/// Pure state transition function.
///
/// Mutates the model in place; the event loop re-renders from the new
/// state after every call, so no change notification is needed.
pub fn update(app: &mut App, action: &Action) {
    match action {
        Action::Input(c) => {
            app.pending.push(*c);
        }
        Action::Backspace => {
            app.pending.pop();
        }
        Action::Submit => {
            app.add_color();
        }
        Action::MoveUp => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        Action::MoveDown => {
            let len = app.palette.len();
            app.cursor = if len == 0 { 0 } else { (app.cursor + 1).min(len - 1) };
        }
        Action::Quit => {
            app.should_quit = true;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            update(app, &Action::Input(c));
        }
    }

    // -- Input editing --

    #[test]
    fn input_appends_characters() {
        let mut app = App::new();
        type_word(&mut app, "teal");
        assert_eq!(app.pending, "teal");
    }

    #[test]
    fn backspace_removes_last_character() {
        let mut app = App::new();
        type_word(&mut app, "teal");
        update(&mut app, &Action::Backspace);
        assert_eq!(app.pending, "tea");
    }

    #[test]
    fn backspace_on_empty_input_is_a_noop() {
        let mut app = App::new();
        update(&mut app, &Action::Backspace);
        assert_eq!(app.pending, "");
        assert_eq!(app.palette.len(), 3);
    }

    // -- Submit (the add-color action) --

    #[test]
    fn submit_appends_to_the_palette() {
        let mut app = App::new();
        type_word(&mut app, "purple");
        update(&mut app, &Action::Submit);
        assert_eq!(app.palette.names(), vec!["blue", "green", "red", "purple"]);
        assert_eq!(app.palette.len(), 4);
    }

    #[test]
    fn submit_with_empty_input_changes_nothing() {
        let mut app = App::new();
        let before = app.clone();
        update(&mut app, &Action::Submit);
        assert_eq!(app, before);
    }

    #[test]
    fn repeated_empty_submits_change_nothing() {
        let mut app = App::new();
        let before = app.palette.clone();
        for _ in 0..50 {
            update(&mut app, &Action::Submit);
        }
        assert_eq!(app.palette, before);
    }

    #[test]
    fn submit_preserves_pending_input() {
        // The input field is intentionally not cleared after an add.
        let mut app = App::new();
        type_word(&mut app, "teal");
        update(&mut app, &Action::Submit);
        assert_eq!(app.pending, "teal");
    }

    #[test]
    fn successive_submits_preserve_order() {
        let mut app = App::new();
        for word in ["one", "two", "three"] {
            app.pending.clear();
            type_word(&mut app, word);
            update(&mut app, &Action::Submit);
        }
        assert_eq!(
            app.palette.names(),
            vec!["blue", "green", "red", "one", "two", "three"]
        );
    }

    #[test]
    fn end_to_end_scenario() {
        let mut app = App::new();
        assert_eq!(app.palette.names(), vec!["blue", "green", "red"]);
        assert_eq!(app.pending, "");

        type_word(&mut app, "purple");
        update(&mut app, &Action::Submit);
        assert_eq!(app.palette.names(), vec!["blue", "green", "red", "purple"]);

        app.pending.clear();
        update(&mut app, &Action::Submit);
        assert_eq!(app.palette.len(), 4);

        type_word(&mut app, "teal");
        update(&mut app, &Action::Submit);
        assert_eq!(
            app.palette.names(),
            vec!["blue", "green", "red", "purple", "teal"]
        );
    }

    // -- Cursor --

    #[test]
    fn cursor_up_at_top_stays() {
        let mut app = App::new();
        update(&mut app, &Action::MoveUp);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn cursor_down_clamps_at_end() {
        let mut app = App::new();
        for _ in 0..10 {
            update(&mut app, &Action::MoveDown);
        }
        assert_eq!(app.cursor, app.palette.len() - 1);
    }

    #[test]
    fn cursor_never_mutates_the_palette() {
        let mut app = App::new();
        let before = app.palette.clone();
        update(&mut app, &Action::MoveDown);
        update(&mut app, &Action::MoveUp);
        assert_eq!(app.palette, before);
    }

    // -- Quit --

    #[test]
    fn quit_sets_the_flag() {
        let mut app = App::new();
        update(&mut app, &Action::Quit);
        assert!(app.should_quit);
    }
}
