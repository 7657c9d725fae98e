//! Domain types for palette-pad.

use serde::{Deserialize, Serialize};

/// The colors every palette starts with.
pub const SEED_COLORS: [&str; 3] = ["blue", "green", "red"];

// ============================================================================
// PRIMITIVES
// ============================================================================

/// One stored color name.
///
/// Any non-empty string — "blue", "teal", "#ff8800". No format validation
/// happens here; an unrecognized name simply renders in the default
/// terminal color. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorEntry(String);

impl ColorEntry {
    /// Wrap a name as an entry. Returns None for the empty string.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() { None } else { Some(ColorEntry(name)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ColorEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// PALETTE
// ============================================================================

/// An ordered, append-only collection of color entries.
///
/// Insertion order is display order. Entries are never removed or
/// deduplicated; length only grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<ColorEntry>,
}

impl Palette {
    /// Empty palette.
    pub fn new() -> Self {
        Palette { entries: Vec::new() }
    }

    /// Palette pre-populated with [`SEED_COLORS`].
    pub fn seeded() -> Self {
        Palette {
            entries: SEED_COLORS
                .iter()
                .map(|name| ColorEntry(name.to_string()))
                .collect(),
        }
    }

    /// Palette built from the given names, skipping empty strings.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Palette {
            entries: names.into_iter().filter_map(ColorEntry::new).collect(),
        }
    }

    /// Append an entry at the end.
    pub fn push(&mut self, entry: ColorEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColorEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorEntry> {
        self.entries.iter()
    }

    /// Entry names as plain strings, in display order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.as_str()).collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::seeded()
    }
}

// ============================================================================
// OUTPUT FORMAT
// ============================================================================

/// Output format for non-interactive listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
