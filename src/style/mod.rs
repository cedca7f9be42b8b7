//! Style model: [`Color`], [`Modifier`], [`Style`].

mod color;
mod modifier;
mod style;

pub use color::{Color, NamedColor};
pub use modifier::Modifier;
pub use style::Style;
