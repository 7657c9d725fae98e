//! TUI module for the interactive palette screen.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Action, AppEvent)
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `run`: Effects boundary (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
