//! The event sum type delivered to a [`crate::runner::TuiRunner`] handler,
//! independent of any particular backend's wire encoding.

mod key;
mod modifiers;
mod mouse;
mod tick;

pub use key::{KeyCode, KeyEvent};
pub use modifiers::Modifiers;
pub use mouse::{MouseButton, MouseEvent, MouseEventKind};
pub use tick::{ResizeEvent, TickEvent};

/// One event delivered per handler invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick(TickEvent),
    Resize(ResizeEvent),
}

impl From<KeyEvent> for Event {
    fn from(event: KeyEvent) -> Self {
        Event::Key(event)
    }
}

impl From<MouseEvent> for Event {
    fn from(event: MouseEvent) -> Self {
        Event::Mouse(event)
    }
}

impl From<TickEvent> for Event {
    fn from(event: TickEvent) -> Self {
        Event::Tick(event)
    }
}

impl From<ResizeEvent> for Event {
    fn from(event: ResizeEvent) -> Self {
        Event::Resize(event)
    }
}
