//! Unicode display-width computation.
//!
//! Widths follow the `unicode-width` crate's Unicode Standard Annex #11
//! tables (the authoritative source chosen for this core, rather than a
//! simplified codepoint-range guess). Grapheme-cluster segmentation via
//! `unicode-segmentation` is used so that zero-width joiners and
//! combining marks attach to their base character instead of being
//! counted as independent zero-width cells.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Display width of a single code point: 0, 1, or 2 columns. Control
/// characters (width `None` in the underlying table) count as 0.
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Display width of a string, summing the width of each grapheme cluster
/// (the widest code point within a cluster — the base glyph — dominates;
/// zero-width joiners and combining marks contribute 0 on top of it).
pub fn str_width(s: &str) -> usize {
    s.graphemes(true)
        .map(|g| g.chars().map(char_width).max().unwrap_or(0))
        .sum()
}
