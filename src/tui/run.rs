//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! A single key-reader thread feeds an mpsc channel; the event loop
//! re-renders from current state before blocking on the next event, so
//! every mutation is visible on the following frame.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::state::{Action, App, AppEvent};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Printable characters feed the input field, so quitting is Esc or
/// Ctrl+C rather than 'q'. Returns None for keys that don't map to
/// any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char(c) => Some(Action::Input(c)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key events to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore mouse, resize, etc.
                Err(_) => break,
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop until the user quits.
///
/// Only this loop touches the App; the key reader merely forwards events,
/// so state stays single-owner the whole session.
pub fn run() -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new();

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    loop {
        // Render from current state
        terminal.draw(|frame| render(&app, frame))?;

        // Check quit flag
        if app.should_quit {
            break;
        }

        // Block on next event
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // sender dropped
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    update(&mut app, &action);
                }
            }
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
