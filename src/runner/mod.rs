//! Event loop, focus, and routing: everything that turns a stream of
//! backend events into calls against an application's own state.

mod config;
mod focus;
mod router;
mod runner;

pub use config::{Stream, TuiConfig};
pub use focus::FocusManager;
pub use router::{DragState, EventRouter, KeyRoute, MouseRoute};
pub use runner::{App, RunError, TuiRunner};
