//! Keyboard/mouse modifier keys, as a bitset.

use bitflags::bitflags;

bitflags! {
    /// The modifier keys held during a key or mouse event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT   = 0b0001;
        const CONTROL = 0b0010;
        const ALT     = 0b0100;
        const SUPER   = 0b1000;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_modifiers_contain_nothing() {
        assert!(Modifiers::empty().is_empty());
    }

    #[test]
    fn union_combines_flags() {
        let both = Modifiers::SHIFT | Modifiers::CONTROL;
        assert!(both.contains(Modifiers::SHIFT));
        assert!(both.contains(Modifiers::CONTROL));
        assert!(!both.contains(Modifiers::ALT));
    }
}
