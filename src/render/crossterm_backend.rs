//! A [`Backend`] wrapping `crossterm`, the only backend this crate ships.
//!
//! Unlike a threaded input-channel design, `poll_event` here is a direct,
//! synchronous `crossterm::event::poll` + `read` call: the runner's loop
//! is the only place that blocks on input, so there is no second thread
//! or channel to keep alive.

use std::io::Write;
use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode as CtKeyCode, KeyEventKind, MouseEventKind as CtMouseKind,
};
use crossterm::style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};

use crate::buffer::CellUpdate;
use crate::event::{
    Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind, ResizeEvent,
};
use crate::geometry::{Position, Size};
use crate::style::{Color, NamedColor, Style};

use super::backend::Backend;

/// Drives a real terminal through `crossterm`, writing to any `W:
/// Write` (typically `io::Stdout`).
pub struct CrosstermBackend<W: Write> {
    writer: W,
}

impl<W: Write> CrosstermBackend<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn to_crossterm_color(color: Color) -> CtColor {
    match color {
        Color::Reset => CtColor::Reset,
        Color::Indexed(i) => CtColor::AnsiValue(i),
        Color::Rgb(r, g, b) => CtColor::Rgb { r, g, b },
        Color::Named(named) => match named {
            NamedColor::Black => CtColor::Black,
            NamedColor::Red => CtColor::DarkRed,
            NamedColor::Green => CtColor::DarkGreen,
            NamedColor::Yellow => CtColor::DarkYellow,
            NamedColor::Blue => CtColor::DarkBlue,
            NamedColor::Magenta => CtColor::DarkMagenta,
            NamedColor::Cyan => CtColor::DarkCyan,
            NamedColor::Gray => CtColor::Grey,
            NamedColor::DarkGray => CtColor::DarkGrey,
            NamedColor::LightRed => CtColor::Red,
            NamedColor::LightGreen => CtColor::Green,
            NamedColor::LightYellow => CtColor::Yellow,
            NamedColor::LightBlue => CtColor::Blue,
            NamedColor::LightMagenta => CtColor::Magenta,
            NamedColor::LightCyan => CtColor::Cyan,
            NamedColor::White => CtColor::White,
        },
    }
}

fn queue_style(writer: &mut impl Write, style: Style) -> std::io::Result<()> {
    if let Some(fg) = style.fg {
        queue!(writer, SetForegroundColor(to_crossterm_color(fg)))?;
    }
    if let Some(bg) = style.bg {
        queue!(writer, SetBackgroundColor(to_crossterm_color(bg)))?;
    }

    let modifiers = style.effective_modifiers();
    use crate::style::Modifier;
    if modifiers.contains(Modifier::BOLD) {
        queue!(writer, SetAttribute(Attribute::Bold))?;
    }
    if modifiers.contains(Modifier::DIM) {
        queue!(writer, SetAttribute(Attribute::Dim))?;
    }
    if modifiers.contains(Modifier::ITALIC) {
        queue!(writer, SetAttribute(Attribute::Italic))?;
    }
    if modifiers.contains(Modifier::UNDERLINED) {
        queue!(writer, SetAttribute(Attribute::Underlined))?;
    }
    if modifiers.contains(Modifier::SLOW_BLINK) {
        queue!(writer, SetAttribute(Attribute::SlowBlink))?;
    }
    if modifiers.contains(Modifier::RAPID_BLINK) {
        queue!(writer, SetAttribute(Attribute::RapidBlink))?;
    }
    if modifiers.contains(Modifier::REVERSED) {
        queue!(writer, SetAttribute(Attribute::Reverse))?;
    }
    if modifiers.contains(Modifier::HIDDEN) {
        queue!(writer, SetAttribute(Attribute::Hidden))?;
    }
    if modifiers.contains(Modifier::CROSSED_OUT) {
        queue!(writer, SetAttribute(Attribute::CrossedOut))?;
    }
    Ok(())
}

fn convert_key_code(code: CtKeyCode) -> Option<KeyCode> {
    Some(match code {
        CtKeyCode::Char(c) => KeyCode::Char(c),
        CtKeyCode::F(n) => KeyCode::F(n),
        CtKeyCode::Backspace => KeyCode::Backspace,
        CtKeyCode::Enter => KeyCode::Enter,
        CtKeyCode::Left => KeyCode::Left,
        CtKeyCode::Right => KeyCode::Right,
        CtKeyCode::Up => KeyCode::Up,
        CtKeyCode::Down => KeyCode::Down,
        CtKeyCode::Home => KeyCode::Home,
        CtKeyCode::End => KeyCode::End,
        CtKeyCode::PageUp => KeyCode::PageUp,
        CtKeyCode::PageDown => KeyCode::PageDown,
        CtKeyCode::Tab => KeyCode::Tab,
        CtKeyCode::BackTab => KeyCode::BackTab,
        CtKeyCode::Delete => KeyCode::Delete,
        CtKeyCode::Insert => KeyCode::Insert,
        CtKeyCode::Esc => KeyCode::Escape,
        CtKeyCode::Null => KeyCode::Null,
        _ => return None,
    })
}

fn convert_modifiers(mods: crossterm::event::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::empty();
    if mods.contains(crossterm::event::KeyModifiers::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if mods.contains(crossterm::event::KeyModifiers::CONTROL) {
        out |= Modifiers::CONTROL;
    }
    if mods.contains(crossterm::event::KeyModifiers::ALT) {
        out |= Modifiers::ALT;
    }
    if mods.contains(crossterm::event::KeyModifiers::SUPER) {
        out |= Modifiers::SUPER;
    }
    out
}

fn convert_mouse_button(button: crossterm::event::MouseButton) -> MouseButton {
    match button {
        crossterm::event::MouseButton::Left => MouseButton::Left,
        crossterm::event::MouseButton::Middle => MouseButton::Middle,
        crossterm::event::MouseButton::Right => MouseButton::Right,
    }
}

/// Translate one `crossterm` event into this crate's [`Event`]. Returns
/// `None` for events this crate has no vocabulary for (focus
/// gained/lost, bracketed paste, and unrecognized key codes) — the
/// caller polls again rather than surfacing a placeholder.
fn convert_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            let code = convert_key_code(key.code)?;
            Some(Event::Key(KeyEvent::new(code, convert_modifiers(key.modifiers))))
        }
        CrosstermEvent::Mouse(mouse) => {
            let position = Position::new(mouse.column, mouse.row);
            let modifiers = convert_modifiers(mouse.modifiers);
            let kind = match mouse.kind {
                CtMouseKind::Down(button) => MouseEventKind::Press(convert_mouse_button(button)),
                CtMouseKind::Up(button) => MouseEventKind::Release(convert_mouse_button(button)),
                CtMouseKind::Drag(button) => MouseEventKind::Drag(convert_mouse_button(button)),
                CtMouseKind::Moved => MouseEventKind::Moved,
                CtMouseKind::ScrollUp => MouseEventKind::ScrollUp,
                CtMouseKind::ScrollDown => MouseEventKind::ScrollDown,
                CtMouseKind::ScrollLeft | CtMouseKind::ScrollRight => return None,
            };
            Some(Event::Mouse(MouseEvent::new(kind, position, modifiers)))
        }
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(ResizeEvent { width, height })),
        CrosstermEvent::FocusGained | CrosstermEvent::FocusLost | CrosstermEvent::Paste(_) => None,
    }
}

impl<W: Write> Backend for CrosstermBackend<W> {
    type Error = std::io::Error;

    fn draw(&mut self, updates: &[CellUpdate]) -> Result<(), Self::Error> {
        for update in updates {
            queue!(
                self.writer,
                cursor::MoveTo(update.position.x, update.position.y),
            )?;
            queue_style(&mut self.writer, update.cell.style)?;
            let symbol = if update.cell.symbol.is_empty() { " " } else { update.cell.symbol.as_str() };
            queue!(self.writer, crossterm::style::Print(symbol))?;
            queue!(self.writer, SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.writer.flush()
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        execute!(self.writer, terminal::Clear(terminal::ClearType::All))
    }

    fn size(&self) -> Result<Size, Self::Error> {
        let (width, height) = terminal::size()?;
        Ok(Size::new(width, height))
    }

    fn show_cursor(&mut self) -> Result<(), Self::Error> {
        execute!(self.writer, cursor::Show)
    }

    fn hide_cursor(&mut self) -> Result<(), Self::Error> {
        execute!(self.writer, cursor::Hide)
    }

    fn get_cursor_position(&mut self) -> Result<Position, Self::Error> {
        let (x, y) = cursor::position()?;
        Ok(Position::new(x, y))
    }

    fn set_cursor_position(&mut self, position: Position) -> Result<(), Self::Error> {
        execute!(self.writer, cursor::MoveTo(position.x, position.y))
    }

    fn enter_alternate_screen(&mut self) -> Result<(), Self::Error> {
        execute!(self.writer, terminal::EnterAlternateScreen)
    }

    fn leave_alternate_screen(&mut self) -> Result<(), Self::Error> {
        execute!(self.writer, terminal::LeaveAlternateScreen)
    }

    fn enable_raw_mode(&mut self) -> Result<(), Self::Error> {
        terminal::enable_raw_mode()
    }

    fn disable_raw_mode(&mut self) -> Result<(), Self::Error> {
        terminal::disable_raw_mode()
    }

    fn enable_mouse_capture(&mut self) -> Result<(), Self::Error> {
        execute!(self.writer, event::EnableMouseCapture)
    }

    fn disable_mouse_capture(&mut self) -> Result<(), Self::Error> {
        execute!(self.writer, event::DisableMouseCapture)
    }

    fn scroll_up(&mut self, n: u16) -> Result<(), Self::Error> {
        execute!(self.writer, terminal::ScrollUp(n))
    }

    fn scroll_down(&mut self, n: u16) -> Result<(), Self::Error> {
        execute!(self.writer, terminal::ScrollDown(n))
    }

    fn poll_event(&mut self, timeout: Duration) -> Result<Option<Event>, Self::Error> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(convert_event(event::read()?))
    }
}
