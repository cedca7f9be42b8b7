//! The cell grid backing one frame.

use unicode_segmentation::UnicodeSegmentation;

use crate::geometry::{Position, Rect};
use crate::style::Style;
use crate::text::{str_width, Line};

use super::cell::Cell;

/// A rectangular grid of [`Cell`]s, addressed by absolute grid
/// coordinates that fall within `area`.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    area: Rect,
    cells: Vec<Cell>,
}

impl Buffer {
    /// A buffer of `area`'s size, every cell blank.
    pub fn empty(area: Rect) -> Self {
        let len = area.area() as usize;
        Self { area, cells: vec![Cell::blank(); len] }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn width(&self) -> u16 {
        self.area.width
    }

    pub fn height(&self) -> u16 {
        self.area.height
    }

    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.area.x || y < self.area.y || x >= self.area.right() || y >= self.area.bottom() {
            return None;
        }
        let col = (x - self.area.x) as usize;
        let row = (y - self.area.y) as usize;
        Some(row * self.area.width as usize + col)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index_of(x, y).map(move |i| &mut self.cells[i])
    }

    /// Overwrite a single cell. Clipped: a position outside `area` is a
    /// silent no-op, matching how widgets are expected to paint without
    /// manually bounds-checking every write.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index_of(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let Some(rect) = self.area.intersection(rect) else { return };
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, cell.clone());
            }
        }
    }

    /// Reset every cell in the buffer to [`Cell::blank`].
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::blank();
        }
    }

    /// Clear the preceding wide glyph if `x` currently lands on its
    /// trailing `skip` column, so that overwriting one half of a wide
    /// glyph doesn't leave the other half rendering stale content.
    fn clear_wide_glyph_at(&mut self, x: u16, y: u16) {
        if x == self.area.x {
            return;
        }
        let is_skip = self.get(x, y).is_some_and(|c| c.skip);
        if is_skip {
            self.set(x - 1, y, Cell::blank());
        }
    }

    /// Write a styled string starting at `(x, y)`, advancing one column
    /// per display-width unit of each grapheme cluster. Zero-width
    /// clusters are appended to the previous cell instead of occupying a
    /// column. A width-2 cluster marks the following column `skip`.
    /// Writes are clipped to the buffer's row; characters that would
    /// start past the right edge are dropped.
    pub fn set_string(&mut self, x: u16, y: u16, content: &str, style: Style) -> u16 {
        let mut col = x;
        let mut last_written: Option<u16> = None;

        for grapheme in content.graphemes(true) {
            let width = str_width(grapheme);

            if width == 0 {
                if let Some(last_col) = last_written {
                    if let Some(cell) = self.get_mut(last_col, y) {
                        for c in grapheme.chars() {
                            cell.append_symbol(c);
                        }
                    }
                }
                continue;
            }

            if col >= self.area.right() {
                break;
            }

            self.clear_wide_glyph_at(col, y);
            self.set(col, y, Cell::new(grapheme, style));
            last_written = Some(col);

            if width == 2 {
                let next = col + 1;
                if next < self.area.right() {
                    self.clear_wide_glyph_at(next, y);
                    self.set(next, y, Cell { symbol: String::new(), style, skip: true });
                }
            }

            col = col.saturating_add(width as u16);
        }

        col
    }

    pub fn set_line(&mut self, x: u16, y: u16, line: &Line) -> u16 {
        let mut col = x;
        for span in &line.spans {
            col = self.set_string(col, y, &span.content, span.style);
        }
        col
    }

    /// Patch the style of every cell inside `rect ∩ area`, leaving symbols
    /// untouched.
    pub fn set_style(&mut self, rect: Rect, style: Style) {
        let Some(rect) = self.area.intersection(rect) else { return };
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.style = cell.style.patch(style);
                }
            }
        }
    }

    /// Hit-test: the absolute position of `point` translated to this
    /// buffer's local `(col, row)` pair, or `None` if outside `area`.
    pub fn local_position(&self, point: Position) -> Option<(u16, u16)> {
        if self.area.contains(point) {
            Some((point.x - self.area.x, point.y - self.area.y))
        } else {
            None
        }
    }

    /// Composite `other` into `self` at `offset`, cell by cell, clipped to
    /// both buffers' bounds. Used by fault-tolerant rendering to merge an
    /// isolated error-placeholder buffer back into the parent.
    pub fn merge(&mut self, other: &Buffer, offset: Position) {
        for y in other.area.y..other.area.bottom() {
            for x in other.area.x..other.area.right() {
                if let Some(cell) = other.get(x, y) {
                    let dest_x = offset.x + (x - other.area.x);
                    let dest_y = offset.y + (y - other.area.y);
                    self.set(dest_x, dest_y, cell.clone());
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn diagnostic_string(&self) -> String {
        let mut out = String::new();
        for y in self.area.y..self.area.bottom() {
            for x in self.area.x..self.area.right() {
                match self.get(x, y) {
                    Some(c) if c.skip => {}
                    Some(c) if c.symbol.is_empty() => out.push(' '),
                    Some(c) => out.push_str(&c.symbol),
                    None => out.push(' '),
                }
            }
            out.push('\n');
        }
        out
    }
}
