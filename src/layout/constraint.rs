//! Segment sizing constraints for the 1-D solver.

use super::error::LayoutError;

/// One segment's sizing rule, resolved against a total length `L` by
/// [`super::solver::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// A fixed number of cells.
    Length(u16),
    /// A percentage of `L`, 0..=100.
    Percentage(u16),
    /// `num/den` of `L`.
    Ratio(u32, u32),
    /// At least `n` cells, can grow up to `L`.
    Min(u16),
    /// At most `n` cells, can shrink to 0.
    Max(u16),
    /// Takes a share of the leftover space proportional to `weight`
    /// relative to other `Fill` constraints.
    Fill(u16),
}

impl Constraint {
    pub(super) fn validate(self) -> Result<(), LayoutError> {
        match self {
            Constraint::Percentage(p) if p > 100 => Err(LayoutError::InvalidPercentage { value: p }),
            Constraint::Ratio(num, den) if num > den => Err(LayoutError::InvalidRatio { num, den }),
            Constraint::Fill(0) => Err(LayoutError::ZeroWeight),
            _ => Ok(()),
        }
    }

    /// `(min, max)` bounds against total length `total`.
    pub(super) fn bounds(self, total: u16) -> (u16, u16) {
        match self {
            Constraint::Length(n) => (n.min(total), n.min(total)),
            Constraint::Percentage(p) => {
                let n = ((total as u32 * p as u32) / 100) as u16;
                (n, n)
            }
            Constraint::Ratio(num, den) => {
                let n = if den == 0 { 0 } else { ((total as u64 * num as u64) / den as u64) as u16 };
                (n.min(total), n.min(total))
            }
            Constraint::Min(n) => (n.min(total), total),
            Constraint::Max(n) => (0, n.min(total)),
            Constraint::Fill(_) => (0, total),
        }
    }

    pub(super) fn fill_weight(self) -> Option<u16> {
        match self {
            Constraint::Fill(w) => Some(w),
            _ => None,
        }
    }
}
