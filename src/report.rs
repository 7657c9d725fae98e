//! Palette formatting for non-interactive output.
//!
//! Pure functions — (Palette, OutputFormat) → String.
//! No I/O, no side effects.

use crate::types::{OutputFormat, Palette};

/// Format a palette for output.
pub fn format_palette(palette: &Palette, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(palette),
        OutputFormat::Json => format_json(palette),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(palette: &Palette) -> String {
    let mut out = String::new();

    if palette.is_empty() {
        out.push_str("Palette is empty.\n");
        return out;
    }

    out.push_str("=== Palette ===\n");
    for entry in palette.iter() {
        out.push_str(&format!("  {}\n", entry));
    }
    out.push_str(&format!("\n{} colors\n", palette.len()));

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(palette: &Palette) -> String {
    // serde_json::to_string_pretty for readable output
    serde_json::to_string_pretty(palette).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize palette to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_format_lists_entries_in_order() {
        let palette = Palette::seeded();
        let out = format_palette(&palette, OutputFormat::Human);
        assert!(out.contains("=== Palette ==="));

        let blue = out.find("blue").unwrap();
        let green = out.find("green").unwrap();
        let red = out.find("red").unwrap();
        assert!(blue < green && green < red);
        assert!(out.contains("3 colors"));
    }

    #[test]
    fn human_format_handles_empty_palette() {
        let out = format_palette(&Palette::new(), OutputFormat::Human);
        assert_eq!(out, "Palette is empty.\n");
    }

    #[test]
    fn json_format_is_valid_json() {
        let palette = Palette::seeded();
        let out = format_palette(&palette, OutputFormat::Json);
        let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, vec!["blue", "green", "red"]);
    }
}
