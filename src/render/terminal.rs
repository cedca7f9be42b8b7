//! [`Terminal`]: owns the double-buffered grid and drives one draw cycle
//! per call to [`Terminal::draw`].

use tracing::debug;

use crate::buffer::{diff, Buffer};
use crate::geometry::Rect;

use super::backend::Backend;
use super::error::TerminalError;
use super::frame::{Frame, StyledArea};

/// A snapshot of what was just displayed: the buffer that was flushed to
/// the backend and the area it covers. Cheap to hand back to the caller
/// since `draw` already owns both by value at that point.
#[derive(Debug, Clone)]
pub struct CompletedFrame {
    pub buffer: Buffer,
    pub area: Rect,
    pub styled_areas: Vec<StyledArea>,
}

/// Owns the current and previous frame buffers plus a backend, and turns
/// a render closure into a minimal stream of backend updates each call.
pub struct Terminal<B: Backend> {
    backend: B,
    current_buffer: Buffer,
    previous_buffer: Buffer,
    cursor_hidden: bool,
    fault_tolerant: bool,
}

impl<B: Backend> Terminal<B> {
    pub fn new(mut backend: B) -> Result<Self, TerminalError<B::Error>> {
        let size = backend.size().map_err(TerminalError::Io)?;
        let area = Rect::from_size(size);
        Ok(Self {
            backend,
            current_buffer: Buffer::empty(area),
            previous_buffer: Buffer::empty(area),
            cursor_hidden: false,
            fault_tolerant: false,
        })
    }

    /// Whether per-child render calls get their own fault-isolation
    /// boundary (see [`super::Frame::render_child`]). Off by default; the
    /// runner sets this from its configured `fault_tolerant` flag.
    pub fn set_fault_tolerant(&mut self, enabled: bool) {
        self.fault_tolerant = enabled;
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn current_buffer_mut(&mut self) -> &mut Buffer {
        &mut self.current_buffer
    }

    pub fn size(&self) -> Rect {
        self.current_buffer.area()
    }

    /// Run one full draw cycle:
    ///
    /// 1. query the backend's size; if it changed since the last call,
    ///    reallocate both buffers and clear them.
    /// 2. clear the current buffer so the render closure starts blank.
    /// 3. build a [`Frame`] over the current buffer and invoke `render`.
    /// 4. diff the previous and current buffers.
    /// 5. send the diff to the backend.
    /// 6. show or hide the cursor per the frame's request.
    /// 7. flush the backend.
    /// 8. swap current and previous buffers, returning a snapshot of what
    ///    was just displayed.
    pub fn draw<F>(&mut self, render: F) -> Result<CompletedFrame, TerminalError<B::Error>>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        let size = self.backend.size().map_err(TerminalError::Io)?;
        let area = Rect::from_size(size);
        if area != self.current_buffer.area() {
            debug!(width = area.width, height = area.height, "buffer resized");
            self.current_buffer = Buffer::empty(area);
            self.previous_buffer = Buffer::empty(area);
            self.backend.clear().map_err(TerminalError::Io)?;
        }

        self.current_buffer.clear();

        let mut frame = Frame::new(&mut self.current_buffer, area, self.fault_tolerant);
        render(&mut frame);
        let cursor_position = frame.cursor_position();
        let styled_areas = frame.into_styled_areas();

        let updates = diff(&self.previous_buffer, &self.current_buffer)?;
        self.backend.draw(&updates).map_err(TerminalError::Io)?;

        match cursor_position {
            Some(position) => {
                self.backend.set_cursor_position(position).map_err(TerminalError::Io)?;
                if self.cursor_hidden {
                    self.backend.show_cursor().map_err(TerminalError::Io)?;
                    self.cursor_hidden = false;
                }
            }
            None if !self.cursor_hidden => {
                self.backend.hide_cursor().map_err(TerminalError::Io)?;
                self.cursor_hidden = true;
            }
            None => {}
        }

        self.backend.flush().map_err(TerminalError::Io)?;

        self.previous_buffer = self.current_buffer.clone();
        Ok(CompletedFrame { buffer: self.previous_buffer.clone(), area, styled_areas })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::backend::TestBackend;

    #[test]
    fn draw_paints_into_the_backend_buffer() {
        let mut terminal = Terminal::new(TestBackend::new(5, 1)).unwrap();
        terminal
            .draw(|frame| {
                frame.buffer_mut().set_string(0, 0, "hi", crate::style::Style::EMPTY);
            })
            .unwrap();
        assert_eq!(terminal.backend().buffer().get(0, 0).unwrap().symbol, "h");
    }

    #[test]
    fn resize_reallocates_both_buffers() {
        let mut terminal = Terminal::new(TestBackend::new(3, 1)).unwrap();
        terminal.draw(|_| {}).unwrap();
        terminal.backend_mut().resize(6, 2);
        terminal.draw(|_| {}).unwrap();
        assert_eq!(terminal.size(), Rect::new(0, 0, 6, 2));
    }

    #[test]
    fn resize_clears_the_backend_so_stale_content_is_wiped() {
        let mut terminal = Terminal::new(TestBackend::new(3, 1)).unwrap();
        terminal.draw(|_| {}).unwrap();
        assert_eq!(terminal.backend().clear_count(), 0);
        terminal.backend_mut().resize(6, 2);
        terminal.draw(|_| {}).unwrap();
        assert_eq!(terminal.backend().clear_count(), 1);
        terminal.draw(|_| {}).unwrap();
        assert_eq!(terminal.backend().clear_count(), 1);
    }

    #[test]
    fn second_draw_only_sends_changed_cells() {
        let mut terminal = Terminal::new(TestBackend::new(5, 1)).unwrap();
        terminal
            .draw(|frame| {
                frame.buffer_mut().set_string(0, 0, "ab", crate::style::Style::EMPTY);
            })
            .unwrap();
        terminal.backend_mut().clear_log();
        terminal
            .draw(|frame| {
                frame.buffer_mut().set_string(0, 0, "ab", crate::style::Style::EMPTY);
            })
            .unwrap();
        assert!(terminal.backend().updates_log().is_empty());
    }

    #[test]
    fn cursor_is_shown_only_when_requested() {
        let mut terminal = Terminal::new(TestBackend::new(3, 1)).unwrap();
        terminal
            .draw(|frame| frame.set_cursor(crate::geometry::Position::new(1, 0)))
            .unwrap();
        assert!(terminal.backend().is_cursor_visible());
    }
}
