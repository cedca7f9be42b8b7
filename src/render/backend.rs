//! The abstract backend contract the render pipeline drives, plus an
//! in-memory [`TestBackend`] implementing it deterministically.

use std::convert::Infallible;
use std::time::Duration;

use crate::buffer::{Buffer, CellUpdate};
use crate::event::Event;
use crate::geometry::{Position, Rect, Size};

/// Everything `Terminal<B>` needs from a concrete terminal I/O layer.
///
/// Implementations translate their own wire format (escape sequences,
/// an in-memory log, …) to and from the types in [`crate::event`] and
/// [`crate::buffer`]; the render pipeline and runner never see anything
/// backend-specific.
pub trait Backend {
    type Error: std::error::Error + 'static;

    fn draw(&mut self, updates: &[CellUpdate]) -> Result<(), Self::Error>;
    fn flush(&mut self) -> Result<(), Self::Error>;
    fn clear(&mut self) -> Result<(), Self::Error>;
    fn size(&self) -> Result<Size, Self::Error>;

    fn show_cursor(&mut self) -> Result<(), Self::Error>;
    fn hide_cursor(&mut self) -> Result<(), Self::Error>;
    fn get_cursor_position(&mut self) -> Result<Position, Self::Error>;
    fn set_cursor_position(&mut self, position: Position) -> Result<(), Self::Error>;

    fn enter_alternate_screen(&mut self) -> Result<(), Self::Error>;
    fn leave_alternate_screen(&mut self) -> Result<(), Self::Error>;
    fn enable_raw_mode(&mut self) -> Result<(), Self::Error>;
    fn disable_raw_mode(&mut self) -> Result<(), Self::Error>;
    fn enable_mouse_capture(&mut self) -> Result<(), Self::Error>;
    fn disable_mouse_capture(&mut self) -> Result<(), Self::Error>;

    fn scroll_up(&mut self, n: u16) -> Result<(), Self::Error>;
    fn scroll_down(&mut self, n: u16) -> Result<(), Self::Error>;

    /// Block for at most `timeout` waiting for the next event; `None` on
    /// timeout with nothing pending.
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<Event>, Self::Error>;
}

/// A deterministic, in-memory [`Backend`] with no real I/O: the buffer it
/// "draws" to is inspectable, every `CellUpdate` it receives is logged,
/// and its event stream is a queue the test fills ahead of time.
#[derive(Debug)]
pub struct TestBackend {
    buffer: Buffer,
    updates_log: Vec<CellUpdate>,
    events: std::collections::VecDeque<Event>,
    cursor: Position,
    cursor_visible: bool,
    raw_mode: bool,
    alternate_screen: bool,
    mouse_capture: bool,
    clear_count: usize,
}

impl TestBackend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::empty(Rect::new(0, 0, width, height)),
            updates_log: Vec::new(),
            events: std::collections::VecDeque::new(),
            cursor: Position::ORIGIN,
            cursor_visible: true,
            raw_mode: false,
            alternate_screen: false,
            mouse_capture: false,
            clear_count: 0,
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn updates_log(&self) -> &[CellUpdate] {
        &self.updates_log
    }

    pub fn clear_log(&mut self) {
        self.updates_log.clear();
    }

    /// Queue an event to be returned by a future `poll_event` call.
    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.buffer = Buffer::empty(Rect::new(0, 0, width, height));
    }

    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.alternate_screen
    }

    pub fn is_mouse_capture_enabled(&self) -> bool {
        self.mouse_capture
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn clear_count(&self) -> usize {
        self.clear_count
    }
}

impl Backend for TestBackend {
    type Error = Infallible;

    fn draw(&mut self, updates: &[CellUpdate]) -> Result<(), Self::Error> {
        for update in updates {
            self.buffer.set(update.position.x, update.position.y, update.cell.clone());
        }
        self.updates_log.extend_from_slice(updates);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.buffer.clear();
        self.clear_count += 1;
        Ok(())
    }

    fn size(&self) -> Result<Size, Self::Error> {
        Ok(self.buffer.area().size())
    }

    fn show_cursor(&mut self) -> Result<(), Self::Error> {
        self.cursor_visible = true;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<(), Self::Error> {
        self.cursor_visible = false;
        Ok(())
    }

    fn get_cursor_position(&mut self) -> Result<Position, Self::Error> {
        Ok(self.cursor)
    }

    fn set_cursor_position(&mut self, position: Position) -> Result<(), Self::Error> {
        self.cursor = position;
        Ok(())
    }

    fn enter_alternate_screen(&mut self) -> Result<(), Self::Error> {
        self.alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<(), Self::Error> {
        self.alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<(), Self::Error> {
        self.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<(), Self::Error> {
        self.raw_mode = false;
        Ok(())
    }

    fn enable_mouse_capture(&mut self) -> Result<(), Self::Error> {
        self.mouse_capture = true;
        Ok(())
    }

    fn disable_mouse_capture(&mut self) -> Result<(), Self::Error> {
        self.mouse_capture = false;
        Ok(())
    }

    fn scroll_up(&mut self, _n: u16) -> Result<(), Self::Error> {
        Ok(())
    }

    fn scroll_down(&mut self, _n: u16) -> Result<(), Self::Error> {
        Ok(())
    }

    fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>, Self::Error> {
        Ok(self.events.pop_front())
    }
}
