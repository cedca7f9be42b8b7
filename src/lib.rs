//! A retained-mode terminal UI core: a cell buffer and diff, a
//! constraint-based layout solver, a render pipeline built around a
//! pluggable [`Backend`](render::Backend), and a single-threaded event
//! loop with focus and mouse routing.
//!
//! The tree is re-walked and re-rendered from scratch every frame —
//! there is no virtual-DOM diffing and no process-wide mutable state.
//! Only the output grid is diffed, in [`buffer::diff`].
//!
//! ```no_run
//! use tui_core::event::{Event, KeyCode};
//! use tui_core::render::{CrosstermBackend, Frame};
//! use tui_core::runner::{App, TuiConfig, TuiRunner};
//!
//! struct Hello;
//!
//! impl App for Hello {
//!     fn handle_event(&mut self, _event: Event) -> bool {
//!         false
//!     }
//!
//!     fn render(&mut self, frame: &mut Frame<'_>) {
//!         frame.buffer_mut().set_string(0, 0, "hello", Default::default());
//!     }
//!
//!     fn should_quit(&self) -> bool {
//!         false
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = CrosstermBackend::new(std::io::stdout());
//! let runner = TuiRunner::new(backend, TuiConfig::new())?;
//! runner.run(&mut Hello)?;
//! # Ok(())
//! # }
//! ```

pub mod buffer;
pub mod error;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod runner;
pub mod style;
pub mod text;

pub use buffer::{Buffer, Cell};
pub use error::{ErrorAction, RenderErrorHandler, RenderFailure};
pub use event::Event;
pub use geometry::{Position, Rect, Size};
pub use layout::{Constraint, Layout};
pub use render::{Backend, Frame, Terminal, Widget};
pub use runner::{App, TuiConfig, TuiRunner};
pub use style::{Color, Modifier, Style};
