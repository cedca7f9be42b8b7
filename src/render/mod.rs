//! The render pipeline: a [`Backend`] contract, the [`Terminal`] draw
//! loop built on top of it, and the per-frame [`Frame`]/[`Widget`]
//! surface a render closure sees.

mod backend;
mod crossterm_backend;
mod error;
mod frame;
mod terminal;

pub use backend::{Backend, TestBackend};
pub use crossterm_backend::CrosstermBackend;
pub use error::TerminalError;
pub use frame::{Frame, StatefulWidget, StyledArea, Widget};
pub use terminal::{CompletedFrame, Terminal};
