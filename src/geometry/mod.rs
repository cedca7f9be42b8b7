//! Grid primitives.
//!
//! Pure value types describing positions and areas on the character grid:
//! [`Rect`], [`Position`], [`Size`], [`Padding`], [`Margin`], [`Alignment`],
//! [`ContentAlignment`], [`Direction`]. Everything here is geometry — no
//! styling, no cells, no layout solving.

mod alignment;
mod position;
mod rect;

pub use alignment::{Alignment, ContentAlignment, Direction};
pub use position::{Margin, Padding, Position, Size};
pub use rect::Rect;
