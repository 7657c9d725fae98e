//! Pure rendering: map App state to ratatui widget trees.
//!
//! Widget-building functions are pure (state in, widgets out); the only
//! effect is Frame::render_widget() which writes to the terminal buffer.
//!
//! `color_item` is the presentational contract for one palette entry: the
//! list loop calls it once per entry, and the entry's own value decides
//! its foreground color.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::color::entry_color;
use crate::types::ColorEntry;

use super::state::App;
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the app to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // palette list
        Constraint::Length(1), // input field
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(app), chunks[0]);
    render_palette(app, frame, chunks[1]);
    frame.render_widget(render_input(app), chunks[2]);
    frame.render_widget(render_help(), chunks[3]);
}

// ============================================================================
// CHROME
// ============================================================================

/// Title bar with the entry count.
fn render_title(app: &App) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("palette-pad", theme::STYLE_TITLE),
        Span::styled(format!("  {} colors", app.palette.len()), theme::STYLE_DIM),
    ]))
}

/// Help line showing the available keybindings.
fn render_help() -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        "[type] color name  [Enter] add  [Up/Down] browse  [Esc] quit",
        theme::STYLE_HELP,
    ))
}

// ============================================================================
// PALETTE LIST
// ============================================================================

/// One palette entry as a renderable line.
///
/// The entry's text is the color name; its foreground is that same name
/// resolved as a color. Unresolvable names render in the default color.
pub fn color_item(entry: &ColorEntry) -> Line<'static> {
    Line::from(Span::styled(
        entry.as_str().to_string(),
        Style::new().fg(entry_color(entry)),
    ))
}

fn render_palette(app: &App, frame: &mut Frame, area: Rect) {
    let height = area.height as usize;

    // Keep the cursor row visible: derive the scroll offset here rather
    // than storing it in the model.
    let offset = app.cursor.saturating_sub(height.saturating_sub(1));

    let lines: Vec<Line> = app
        .palette
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(i, entry)| {
            let line = color_item(entry);
            if i == app.cursor {
                line.style(theme::STYLE_CURSOR)
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

// ============================================================================
// INPUT FIELD
// ============================================================================

/// The add-color input line, re-read from the model every frame.
fn input_line(app: &App) -> Line<'static> {
    Line::from(vec![
        Span::styled("add color> ", theme::STYLE_INPUT_LABEL),
        Span::raw(app.pending.clone()),
        Span::styled("█", theme::STYLE_CARET),
    ])
}

fn render_input(app: &App) -> Paragraph<'static> {
    Paragraph::new(input_line(app))
}

// ============================================================================
// TESTS
// ============================================================================
