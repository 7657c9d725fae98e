//! palette-pad: a terminal scratchpad for collecting named colors.

pub mod color;
pub mod report;
pub mod tui;
pub mod types;
