//! A block of text: an ordered list of lines.

use super::line::Line;

/// Multiple lines of text, as painted by a widget spanning several rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    pub lines: Vec<Line>,
}

impl Text {
    pub fn raw(content: impl Into<String>) -> Self {
        let content = content.into();
        Self { lines: content.lines().map(Line::raw).collect() }
    }

    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// The width of the widest line.
    pub fn width(&self) -> usize {
        self.lines.iter().map(Line::width).max().unwrap_or(0)
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Self::raw(content)
    }
}

impl From<Line> for Text {
    fn from(line: Line) -> Self {
        Self::from_lines(vec![line])
    }
}
