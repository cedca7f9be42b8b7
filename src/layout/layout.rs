//! The public entry point to the constraint solver: [`Layout`].

use crate::geometry::{Direction, Padding, Rect};

use super::constraint::Constraint;
use super::error::LayoutError;
use super::flex::Flex;
use super::solver::{solve, Segment};
use super::spacing::Spacing;

/// A reusable, validated recipe for splitting a [`Rect`] into segments
/// along one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    direction: Direction,
    constraints: Vec<Constraint>,
    flex: Flex,
    spacing: Spacing,
    margin_horizontal: u16,
    margin_vertical: u16,
}

impl Layout {
    /// Build a layout from a direction and a non-empty constraint list.
    ///
    /// Fails if the list is empty or any constraint is itself invalid
    /// (out-of-range percentage, inverted ratio, zero `Fill` weight).
    pub fn new<I>(direction: Direction, constraints: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = Constraint>,
    {
        let constraints: Vec<Constraint> = constraints.into_iter().collect();
        if constraints.is_empty() {
            return Err(LayoutError::EmptyConstraints);
        }
        for c in &constraints {
            c.validate()?;
        }
        Ok(Self {
            direction,
            constraints,
            flex: Flex::default(),
            spacing: Spacing::default(),
            margin_horizontal: 0,
            margin_vertical: 0,
        })
    }

    pub fn horizontal<I>(constraints: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = Constraint>,
    {
        Self::new(Direction::Horizontal, constraints)
    }

    pub fn vertical<I>(constraints: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = Constraint>,
    {
        Self::new(Direction::Vertical, constraints)
    }

    pub fn flex(mut self, flex: Flex) -> Self {
        self.flex = flex;
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Inset the area by `horizontal` columns on each side and `vertical`
    /// rows on each side before solving.
    pub fn margin(mut self, horizontal: u16, vertical: u16) -> Self {
        self.margin_horizontal = horizontal;
        self.margin_vertical = vertical;
        self
    }

    fn inset(&self, area: Rect) -> Rect {
        area.inner(Padding::new(self.margin_horizontal, self.margin_vertical, self.margin_horizontal, self.margin_vertical))
    }

    /// Split `area` into one [`Rect`] per constraint, in declaration
    /// order.
    pub fn split(&self, area: Rect) -> Vec<Rect> {
        let area = self.inset(area);
        let (total, cross) = match self.direction {
            Direction::Horizontal => (area.width, area.height),
            Direction::Vertical => (area.height, area.width),
        };
        let segments = solve(&self.constraints, total, self.flex, self.spacing);
        segments
            .into_iter()
            .map(|segment| self.segment_to_rect(area, segment, cross))
            .collect()
    }

    /// Split `area` the same way as [`Layout::split`], additionally
    /// returning the gap [`Rect`]s that fall strictly between consecutive
    /// segments (zero-length where segments touch or overlap).
    pub fn split_with_spacers(&self, area: Rect) -> (Vec<Rect>, Vec<Rect>) {
        let area = self.inset(area);
        let (total, cross) = match self.direction {
            Direction::Horizontal => (area.width, area.height),
            Direction::Vertical => (area.height, area.width),
        };
        let segments = solve(&self.constraints, total, self.flex, self.spacing);
        let mut gaps = Vec::new();
        for pair in segments.windows(2) {
            let end_of_prev = pair[0].start + pair[0].length;
            let start_of_next = pair[1].start;
            let gap_len = start_of_next.saturating_sub(end_of_prev);
            let gap_start = end_of_prev;
            gaps.push(Segment { start: gap_start, length: gap_len });
        }
        let rects = segments.iter().map(|s| self.segment_to_rect(area, *s, cross)).collect();
        let gap_rects = gaps.into_iter().map(|g| self.segment_to_rect(area, g, cross)).collect();
        (rects, gap_rects)
    }

    fn segment_to_rect(&self, area: Rect, segment: Segment, cross: u16) -> Rect {
        match self.direction {
            Direction::Horizontal => Rect::new(
                area.x.saturating_add(segment.start),
                area.y,
                segment.length,
                cross,
            ),
            Direction::Vertical => Rect::new(
                area.x,
                area.y.saturating_add(segment.start),
                cross,
                segment.length,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_c_positions_match_spec_example() {
        let layout = Layout::horizontal([Constraint::Length(3), Constraint::Fill(1), Constraint::Length(5)]).unwrap();
        let area = Rect::new(0, 0, 20, 1);
        let rects = layout.split(area);
        assert_eq!(rects, vec![
            Rect::new(0, 0, 3, 1),
            Rect::new(3, 0, 12, 1),
            Rect::new(15, 0, 5, 1),
        ]);
    }

    #[test]
    fn scenario_d_flex_center_positions() {
        let layout = Layout::horizontal([Constraint::Length(4), Constraint::Length(4)]).unwrap().flex(Flex::Center);
        let area = Rect::new(0, 0, 10, 1);
        let rects = layout.split(area);
        assert_eq!(rects, vec![Rect::new(1, 0, 4, 1), Rect::new(5, 0, 4, 1)]);
    }

    #[test]
    fn vertical_split_uses_height_as_total() {
        let layout = Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).unwrap();
        let area = Rect::new(0, 0, 5, 10);
        let rects = layout.split(area);
        assert_eq!(rects, vec![Rect::new(0, 0, 5, 2), Rect::new(0, 2, 5, 8)]);
    }

    #[test]
    fn empty_constraints_rejected() {
        assert_eq!(Layout::horizontal(Vec::new()).unwrap_err(), LayoutError::EmptyConstraints);
    }

    #[test]
    fn sum_of_segment_extents_equals_total_length() {
        let layout = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(3), Constraint::Length(4)]).unwrap();
        let area = Rect::new(0, 0, 37, 1);
        let rects = layout.split(area);
        let last = rects.last().unwrap();
        assert_eq!(last.x + last.width, area.x + area.width);
    }

    #[test]
    fn margin_insets_the_area_before_solving() {
        let layout = Layout::horizontal([Constraint::Fill(1)]).unwrap().margin(2, 1);
        let area = Rect::new(0, 0, 10, 10);
        let rects = layout.split(area);
        assert_eq!(rects, vec![Rect::new(2, 1, 6, 8)]);
    }

    #[test]
    fn split_with_spacers_reports_gap_rects() {
        let layout = Layout::horizontal([Constraint::Length(3), Constraint::Length(3)]).unwrap().spacing(Spacing::Space(2));
        let area = Rect::new(0, 0, 8, 1);
        let (rects, gaps) = layout.split_with_spacers(area);
        assert_eq!(rects, vec![Rect::new(0, 0, 3, 1), Rect::new(5, 0, 3, 1)]);
        assert_eq!(gaps, vec![Rect::new(3, 0, 2, 1)]);
    }
}
