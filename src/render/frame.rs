//! Per-frame render surface: [`Frame`], the [`Widget`]/[`StatefulWidget`]
//! traits, and the styled-area registry widgets use to tag hit-testable
//! regions for the event router.

use tracing::warn;

use crate::buffer::{Buffer, Cell};
use crate::error::isolate_render;
use crate::geometry::{Position, Rect};
use crate::style::Style;

/// Anything that knows how to paint itself into a region of a [`Buffer`].
///
/// Implementors own no state across frames: the tree is re-walked and
/// re-rendered from scratch every [`super::Terminal::draw`] call, so a
/// widget is just a value describing what to paint, not a long-lived
/// object.
pub trait Widget {
    fn render(self, area: Rect, buffer: &mut Buffer);
}

/// A [`Widget`] that reads (and may mutate) external state while
/// rendering — a list's selected index, a text input's cursor column.
pub trait StatefulWidget {
    type State;

    fn render(self, area: Rect, buffer: &mut Buffer, state: &mut Self::State);
}

/// A named, hit-testable region registered during a render pass.
///
/// Widgets that want to participate in focus or mouse routing call
/// [`Frame::register_styled_area`] with a caller-chosen `tag`; the
/// runner's event router reads the registry back out of the completed
/// frame to build its per-frame hit list. Registration order is
/// preserved, which the router relies on to hit-test top-most-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledArea {
    pub tag: String,
    pub rect: Rect,
}

/// The mutable view a render closure is handed each frame: the buffer to
/// paint into, the area it covers, and the side channels (cursor
/// position, styled-area registry) a widget can use without threading
/// extra arguments through every `render` call.
pub struct Frame<'a> {
    buffer: &'a mut Buffer,
    area: Rect,
    cursor_position: Option<Position>,
    styled_areas: Vec<StyledArea>,
    fault_tolerant: bool,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(buffer: &'a mut Buffer, area: Rect, fault_tolerant: bool) -> Self {
        Self { buffer, area, cursor_position: None, styled_areas: Vec::new(), fault_tolerant }
    }

    /// The full drawable area for this frame.
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        widget.render(area, self.buffer);
    }

    /// Render `widget` into `area`, registering it as a hit-testable
    /// region under `tag`.
    ///
    /// When fault-tolerant rendering is enabled on this frame, a panic
    /// inside `widget`'s render is caught here rather than taking down
    /// the whole frame: a bordered "Error" placeholder is painted into
    /// `area` instead, and `tag` is left out of the styled-area registry
    /// so the failed child's area is never routed to as if it had
    /// rendered normally. With fault tolerance disabled, a panic
    /// propagates like any other child render call.
    pub fn render_child<W: Widget>(&mut self, tag: impl Into<String>, widget: W, area: Rect) {
        let tag = tag.into();
        if !self.fault_tolerant {
            widget.render(area, self.buffer);
            self.styled_areas.push(StyledArea { tag, rect: area });
            return;
        }

        let buffer: &mut Buffer = self.buffer;
        match isolate_render(move || widget.render(area, buffer)) {
            Ok(()) => self.styled_areas.push(StyledArea { tag, rect: area }),
            Err(failure) => {
                warn!(tag = %tag, message = %failure.message, "child render failed, drawing error placeholder");
                self.buffer.merge(&error_placeholder(area), area.position());
            }
        }
    }

    pub fn render_stateful_widget<W: StatefulWidget>(
        &mut self,
        widget: W,
        area: Rect,
        state: &mut W::State,
    ) {
        widget.render(area, self.buffer, state);
    }

    /// Request the terminal cursor be shown at `position` once this frame
    /// is flushed. Calling this more than once keeps the last position.
    pub fn set_cursor(&mut self, position: Position) {
        self.cursor_position = Some(position);
    }

    pub(crate) fn cursor_position(&self) -> Option<Position> {
        self.cursor_position
    }

    pub fn register_styled_area(&mut self, tag: impl Into<String>, rect: Rect) {
        self.styled_areas.push(StyledArea { tag: tag.into(), rect });
    }

    pub fn styled_areas(&self) -> &[StyledArea] {
        &self.styled_areas
    }

    pub(crate) fn into_styled_areas(self) -> Vec<StyledArea> {
        self.styled_areas
    }
}

/// A minimal bordered box labeled "Error", sized to `area` and positioned
/// at its origin so the caller can [`Buffer::merge`] it straight in.
fn error_placeholder(area: Rect) -> Buffer {
    let local = Rect::new(0, 0, area.width, area.height);
    let mut scratch = Buffer::empty(local);

    if local.width >= 2 && local.height >= 2 {
        let right = local.right() - 1;
        let bottom = local.bottom() - 1;
        scratch.set(0, 0, Cell::new("┌", Style::EMPTY));
        scratch.set(right, 0, Cell::new("┐", Style::EMPTY));
        scratch.set(0, bottom, Cell::new("└", Style::EMPTY));
        scratch.set(right, bottom, Cell::new("┘", Style::EMPTY));
        for x in 1..right {
            scratch.set(x, 0, Cell::new("─", Style::EMPTY));
            scratch.set(x, bottom, Cell::new("─", Style::EMPTY));
        }
        for y in 1..bottom {
            scratch.set(0, y, Cell::new("│", Style::EMPTY));
            scratch.set(right, y, Cell::new("│", Style::EMPTY));
        }
        let label_y = if local.height >= 3 { 1 } else { 0 };
        scratch.set_string(1, label_y, "Error", Style::EMPTY);
    } else if local.width > 0 && local.height > 0 {
        scratch.set_string(0, 0, "Error", Style::EMPTY);
    }

    scratch
}
