//! A single run of same-styled text.

use crate::style::Style;
use super::width::str_width;

/// A string and the style it is rendered with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Span {
    pub content: String,
    pub style: Style,
}

impl Span {
    pub fn raw(content: impl Into<String>) -> Self {
        Self { content: content.into(), style: Style::EMPTY }
    }

    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self { content: content.into(), style }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Display width: the sum of the grapheme-cluster widths of `content`.
    pub fn width(&self) -> usize {
        str_width(&self.content)
    }
}

impl From<String> for Span {
    fn from(content: String) -> Self {
        Self::raw(content)
    }
}

impl From<&str> for Span {
    fn from(content: &str) -> Self {
        Self::raw(content)
    }
}
