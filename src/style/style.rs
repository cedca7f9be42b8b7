//! [`Style`] and its patch-composition semantics.

use super::{Color, Modifier};

/// A style patch: optional colors plus a modifier delta.
///
/// `add_modifier`/`sub_modifier` form a small diff algebra rather than a
/// single resolved modifier set, so that composing styles (e.g. a widget's
/// base style overridden by a hover style) can both add and remove
/// modifiers without needing to know the other style's full contents.
/// [`Style::effective_modifiers`] resolves the diff to the flags that are
/// actually active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub underline_color: Option<Color>,
    pub add_modifier: Modifier,
    pub sub_modifier: Modifier,
}

impl Style {
    /// The identity element of [`Style::patch`]: patching with, or being
    /// patched by, `EMPTY` is a no-op.
    pub const EMPTY: Self = Self {
        fg: None,
        bg: None,
        underline_color: None,
        add_modifier: Modifier::empty(),
        sub_modifier: Modifier::empty(),
    };

    pub const fn new() -> Self {
        Self::EMPTY
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn underline_color(mut self, color: Color) -> Self {
        self.underline_color = Some(color);
        self
    }

    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.sub_modifier.remove(modifier);
        self.add_modifier.insert(modifier);
        self
    }

    pub fn remove_modifier(mut self, modifier: Modifier) -> Self {
        self.add_modifier.remove(modifier);
        self.sub_modifier.insert(modifier);
        self
    }

    /// The modifiers actually in effect: everything added, minus anything
    /// since removed.
    pub const fn effective_modifiers(&self) -> Modifier {
        self.add_modifier.difference(self.sub_modifier)
    }

    /// Layer `other` on top of `self`: `other`'s explicit fields win,
    /// `self`'s fields show through where `other` leaves them unset.
    /// Modifier diffs compose so that a later `remove_modifier` overrides
    /// an earlier `add_modifier` for the same flag, and vice versa.
    pub fn patch(&self, other: Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            underline_color: other.underline_color.or(self.underline_color),
            add_modifier: self.add_modifier.difference(other.sub_modifier).union(other.add_modifier),
            sub_modifier: self.sub_modifier.difference(other.add_modifier).union(other.sub_modifier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_patch_identity() {
        let s = Style::new().fg(Color::rgb(1, 2, 3)).add_modifier(Modifier::BOLD);
        assert_eq!(s.patch(Style::EMPTY), s);
        assert_eq!(Style::EMPTY.patch(s), s);
    }

    #[test]
    fn later_fields_win() {
        let base = Style::new().fg(Color::rgb(1, 1, 1)).bg(Color::rgb(2, 2, 2));
        let patch = Style::new().fg(Color::rgb(9, 9, 9));
        let result = base.patch(patch);
        assert_eq!(result.fg, Some(Color::rgb(9, 9, 9)));
        assert_eq!(result.bg, Some(Color::rgb(2, 2, 2)));
    }

    #[test]
    fn remove_modifier_overrides_earlier_add() {
        let base = Style::new().add_modifier(Modifier::BOLD | Modifier::ITALIC);
        let patch = Style::new().remove_modifier(Modifier::BOLD);
        let result = base.patch(patch);
        assert_eq!(result.effective_modifiers(), Modifier::ITALIC);
    }

    #[test]
    fn effective_modifiers_always_disjoint_from_sub() {
        let s = Style::new()
            .add_modifier(Modifier::BOLD | Modifier::DIM)
            .remove_modifier(Modifier::DIM);
        assert!(s.effective_modifiers().intersection(s.sub_modifier).is_empty());
        assert_eq!(s.effective_modifiers(), Modifier::BOLD);
    }

    #[test]
    fn add_modifier_clears_pending_sub() {
        let s = Style::new().remove_modifier(Modifier::BOLD).add_modifier(Modifier::BOLD);
        assert_eq!(s.add_modifier, Modifier::BOLD);
        assert!(s.sub_modifier.is_empty());
    }
}
