//! Inter-segment spacing: a positive gap or a negative overlap.

/// Explicit spacing between adjacent segments on the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// `n` cells of empty gap between each pair of adjacent segments.
    Space(u16),
    /// Segments overlap by `n` cells; a segment is never shrunk below
    /// zero length by overlap alone.
    Overlap(u16),
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Space(0)
    }
}

impl Spacing {
    pub(super) fn as_signed(self) -> i32 {
        match self {
            Spacing::Space(n) => n as i32,
            Spacing::Overlap(n) => -(n as i32),
        }
    }
}
