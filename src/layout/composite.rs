//! Higher-level layout shapes, each specified as a reduction onto
//! [`Layout::split`] rather than a solver of its own.

use crate::geometry::{Direction, Rect};

use super::constraint::Constraint;
use super::error::LayoutError;
use super::layout::Layout;

/// A border-and-center docking layout: up to four fixed-size edge
/// regions around a `Fill`-sized center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dock {
    top: Option<u16>,
    bottom: Option<u16>,
    left: Option<u16>,
    right: Option<u16>,
}

/// The regions produced by [`Dock::split`]. Absent sides carry `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockRegions {
    pub top: Option<Rect>,
    pub bottom: Option<Rect>,
    pub left: Option<Rect>,
    pub right: Option<Rect>,
    pub center: Rect,
}

impl Dock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(mut self, height: u16) -> Self {
        self.top = Some(height);
        self
    }

    pub fn bottom(mut self, height: u16) -> Self {
        self.bottom = Some(height);
        self
    }

    pub fn left(mut self, width: u16) -> Self {
        self.left = Some(width);
        self
    }

    pub fn right(mut self, width: u16) -> Self {
        self.right = Some(width);
        self
    }

    pub fn split(&self, area: Rect) -> DockRegions {
        let mut vertical = Vec::with_capacity(3);
        if self.top.is_some() {
            vertical.push(Constraint::Length(self.top.unwrap()));
        }
        let middle_index = vertical.len();
        vertical.push(Constraint::Fill(1));
        if self.bottom.is_some() {
            vertical.push(Constraint::Length(self.bottom.unwrap()));
        }
        let v_rects = Layout::new(Direction::Vertical, vertical)
            .expect("a Fill plus fixed Lengths is always a valid layout")
            .split(area);

        let top = self.top.map(|_| v_rects[0]);
        let middle = v_rects[middle_index];
        let bottom = self.bottom.map(|_| *v_rects.last().unwrap());

        let mut horizontal = Vec::with_capacity(3);
        if self.left.is_some() {
            horizontal.push(Constraint::Length(self.left.unwrap()));
        }
        let center_index = horizontal.len();
        horizontal.push(Constraint::Fill(1));
        if self.right.is_some() {
            horizontal.push(Constraint::Length(self.right.unwrap()));
        }
        let h_rects = Layout::new(Direction::Horizontal, horizontal)
            .expect("a Fill plus fixed Lengths is always a valid layout")
            .split(middle);

        let left = self.left.map(|_| h_rects[0]);
        let center = h_rects[center_index];
        let right = self.right.map(|_| *h_rects.last().unwrap());

        DockRegions { top, bottom, left, right, center }
    }
}

/// A painter's-algorithm stack: every child occupies the same full area,
/// and the caller renders them in order so later children draw over
/// earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stack;

impl Stack {
    /// `count` copies of `area`, one per child, in paint order.
    pub fn split(area: Rect, count: usize) -> Vec<Rect> {
        vec![area; count]
    }
}

/// Traversal order for [`Grid`] cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnOrder {
    #[default]
    RowFirst,
    ColumnFirst,
}

impl ColumnOrder {
    fn resolve(self, index: usize, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            ColumnOrder::RowFirst => (index / cols.max(1), index % cols.max(1)),
            ColumnOrder::ColumnFirst => (index % rows.max(1), index / rows.max(1)),
        }
    }
}

/// An explicit row/column grid: cell `i` is placed at the position
/// `order.resolve(i, rows, cols)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: Vec<Constraint>,
    rows: Vec<Constraint>,
    order: ColumnOrder,
}

impl Grid {
    pub fn new(columns: Vec<Constraint>, rows: Vec<Constraint>) -> Result<Self, LayoutError> {
        for c in columns.iter().chain(rows.iter()) {
            c.validate()?;
        }
        if columns.is_empty() || rows.is_empty() {
            return Err(LayoutError::EmptyConstraints);
        }
        Ok(Self { columns, rows, order: ColumnOrder::default() })
    }

    pub fn order(mut self, order: ColumnOrder) -> Self {
        self.order = order;
        self
    }

    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// The rect for cell `index`, `0`-based in the configured
    /// [`ColumnOrder`].
    pub fn cell(&self, area: Rect, index: usize) -> Rect {
        let (row, col) = self.order.resolve(index, self.rows.len(), self.columns.len());
        let col_rects = Layout::horizontal(self.columns.clone())
            .expect("constraints were validated in Grid::new")
            .split(area);
        let row_rects = Layout::vertical(self.rows.clone())
            .expect("constraints were validated in Grid::new")
            .split(area);
        Rect::new(col_rects[col].x, row_rects[row].y, col_rects[col].width, row_rects[row].height)
    }

    /// All `rows * cols` cell rects, in `index` order.
    pub fn cells(&self, area: Rect) -> Vec<Rect> {
        (0..self.rows.len() * self.columns.len()).map(|i| self.cell(area, i)).collect()
    }
}

/// A single-row grid: an explicit set of column-width constraints, no
/// row dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    layout: Layout,
}

impl Columns {
    pub fn new(constraints: Vec<Constraint>) -> Result<Self, LayoutError> {
        Ok(Self { layout: Layout::horizontal(constraints)? })
    }

    pub fn split(&self, area: Rect) -> Vec<Rect> {
        self.layout.split(area)
    }
}

/// One item in a [`Flow`]: a fixed `(width, height)` box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowItem {
    pub width: u16,
    pub height: u16,
}

impl FlowItem {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A wrapping left-to-right flow layout, like inline text: items pack
/// onto a row until the next one would cross the right edge, then the
/// row advances by the tallest item seen so far plus vertical spacing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Flow {
    horizontal_spacing: u16,
    vertical_spacing: u16,
}

impl Flow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spacing(mut self, horizontal: u16, vertical: u16) -> Self {
        self.horizontal_spacing = horizontal;
        self.vertical_spacing = vertical;
        self
    }

    pub fn layout(&self, area: Rect, items: &[FlowItem]) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(items.len());
        let mut cursor_x = area.x;
        let mut cursor_y = area.y;
        let mut row_height: u16 = 0;
        let mut at_row_start = true;

        for item in items {
            let crosses_edge = !at_row_start && cursor_x.saturating_add(item.width) > area.x.saturating_add(area.width);
            if crosses_edge {
                cursor_x = area.x;
                cursor_y = cursor_y.saturating_add(row_height).saturating_add(self.vertical_spacing);
                row_height = 0;
                at_row_start = true;
            }
            rects.push(Rect::new(cursor_x, cursor_y, item.width, item.height));
            cursor_x = cursor_x.saturating_add(item.width).saturating_add(self.horizontal_spacing);
            row_height = row_height.max(item.height);
            at_row_start = false;
        }

        rects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dock_omits_absent_sides() {
        let dock = Dock::new().top(2).left(3);
        let regions = dock.split(Rect::new(0, 0, 20, 10));
        assert_eq!(regions.top, Some(Rect::new(0, 0, 20, 2)));
        assert_eq!(regions.bottom, None);
        assert_eq!(regions.left, Some(Rect::new(0, 2, 3, 8)));
        assert_eq!(regions.right, None);
        assert_eq!(regions.center, Rect::new(3, 2, 17, 8));
    }

    #[test]
    fn dock_with_all_four_sides() {
        let dock = Dock::new().top(1).bottom(1).left(2).right(2);
        let regions = dock.split(Rect::new(0, 0, 10, 10));
        assert_eq!(regions.top, Some(Rect::new(0, 0, 10, 1)));
        assert_eq!(regions.bottom, Some(Rect::new(0, 9, 10, 1)));
        assert_eq!(regions.center, Rect::new(2, 1, 6, 8));
    }

    #[test]
    fn stack_gives_every_child_the_full_area() {
        let area = Rect::new(1, 1, 5, 5);
        assert_eq!(Stack::split(area, 3), vec![area, area, area]);
    }

    #[test]
    fn grid_row_first_resolves_in_reading_order() {
        let grid = Grid::new(vec![Constraint::Fill(1); 2], vec![Constraint::Fill(1); 2]).unwrap();
        let area = Rect::new(0, 0, 10, 10);
        let cells = grid.cells(area);
        assert_eq!(cells[0], Rect::new(0, 0, 5, 5));
        assert_eq!(cells[1], Rect::new(5, 0, 5, 5));
        assert_eq!(cells[2], Rect::new(0, 5, 5, 5));
        assert_eq!(cells[3], Rect::new(5, 5, 5, 5));
    }

    #[test]
    fn grid_column_first_resolves_down_columns() {
        let grid = Grid::new(vec![Constraint::Fill(1); 2], vec![Constraint::Fill(1); 2])
            .unwrap()
            .order(ColumnOrder::ColumnFirst);
        let area = Rect::new(0, 0, 10, 10);
        let cells = grid.cells(area);
        assert_eq!(cells[0], Rect::new(0, 0, 5, 5));
        assert_eq!(cells[1], Rect::new(0, 5, 5, 5));
        assert_eq!(cells[2], Rect::new(5, 0, 5, 5));
        assert_eq!(cells[3], Rect::new(5, 5, 5, 5));
    }

    #[test]
    fn columns_delegates_to_horizontal_layout() {
        let columns = Columns::new(vec![Constraint::Length(3), Constraint::Fill(1)]).unwrap();
        let rects = columns.split(Rect::new(0, 0, 10, 1));
        assert_eq!(rects, vec![Rect::new(0, 0, 3, 1), Rect::new(3, 0, 7, 1)]);
    }

    #[test]
    fn flow_wraps_when_an_item_would_cross_the_right_edge() {
        let flow = Flow::new();
        let items = [FlowItem::new(6, 2), FlowItem::new(6, 3), FlowItem::new(4, 1)];
        let rects = flow.layout(Rect::new(0, 0, 10, 20), &items);
        assert_eq!(rects[0], Rect::new(0, 0, 6, 2));
        // second item doesn't fit on row 0 (0+6+6 > 10), wraps to a new row
        assert_eq!(rects[1], Rect::new(0, 2, 6, 3));
        // third item fits after the second on the same row
        assert_eq!(rects[2], Rect::new(6, 2, 4, 1));
    }

    #[test]
    fn flow_never_wraps_the_first_item_on_a_row() {
        let flow = Flow::new();
        let items = [FlowItem::new(50, 1)];
        let rects = flow.layout(Rect::new(0, 0, 10, 20), &items);
        assert_eq!(rects[0], Rect::new(0, 0, 50, 1));
    }
}
