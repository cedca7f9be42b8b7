//! Keyboard events.

use super::modifiers::Modifiers;

/// A single logical key, independent of any particular backend's wire
/// encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    F(u8),
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    BackTab,
    Delete,
    Insert,
    Escape,
    Null,
}

/// A key press, with the modifiers held at the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub const fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, Modifiers::empty())
    }

    /// Plain `Tab`, no modifiers: advances focus forward.
    pub fn is_focus_next(&self) -> bool {
        self.code == KeyCode::Tab && self.modifiers.is_empty()
    }

    /// `Shift+Tab`: advances focus backward.
    pub fn is_focus_previous(&self) -> bool {
        (self.code == KeyCode::Tab && self.modifiers == Modifiers::SHIFT) || self.code == KeyCode::BackTab
    }

    pub fn is_escape(&self) -> bool {
        self.code == KeyCode::Escape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_without_modifiers_is_focus_next() {
        assert!(KeyEvent::plain(KeyCode::Tab).is_focus_next());
    }

    #[test]
    fn shift_tab_is_focus_previous() {
        let event = KeyEvent::new(KeyCode::Tab, Modifiers::SHIFT);
        assert!(event.is_focus_previous());
        assert!(!event.is_focus_next());
    }

    #[test]
    fn backtab_is_also_focus_previous() {
        assert!(KeyEvent::plain(KeyCode::BackTab).is_focus_previous());
    }
}
