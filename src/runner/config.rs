//! [`TuiConfig`]: the terminal modes and timing a [`super::TuiRunner`]
//! sets up and tears down around a run.

use std::time::Duration;

use crate::error::{ErrorAction, FixedErrorHandler, RenderErrorHandler};

/// Where a fault-tolerant runner writes the diagnostic frame it shows
/// before quitting under [`ErrorAction::DisplayAndQuit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Terminal modes and run-loop timing a [`super::TuiRunner`] applies on
/// entry and restores on exit.
pub struct TuiConfig {
    pub raw_mode: bool,
    pub alternate_screen: bool,
    pub hide_cursor: bool,
    pub mouse_capture: bool,
    pub poll_timeout: Duration,
    pub tick_rate: Option<Duration>,
    pub shutdown_hook: bool,
    pub error_output: Stream,
    pub error_handler: Box<dyn RenderErrorHandler>,
    /// Whether each child render call gets its own fault-isolation
    /// boundary, via [`crate::render::Frame::render_child`]. Off by
    /// default: a panicking widget still takes the whole frame down and
    /// is handled by `error_handler`, same as the top-level boundary.
    pub fault_tolerant: bool,
}

impl std::fmt::Debug for TuiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TuiConfig")
            .field("raw_mode", &self.raw_mode)
            .field("alternate_screen", &self.alternate_screen)
            .field("hide_cursor", &self.hide_cursor)
            .field("mouse_capture", &self.mouse_capture)
            .field("poll_timeout", &self.poll_timeout)
            .field("tick_rate", &self.tick_rate)
            .field("shutdown_hook", &self.shutdown_hook)
            .field("error_output", &self.error_output)
            .field("fault_tolerant", &self.fault_tolerant)
            .finish_non_exhaustive()
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            raw_mode: true,
            alternate_screen: true,
            hide_cursor: true,
            mouse_capture: false,
            poll_timeout: DEFAULT_POLL_TIMEOUT,
            tick_rate: None,
            shutdown_hook: true,
            error_output: Stream::default(),
            error_handler: Box::new(FixedErrorHandler(ErrorAction::DisplayAndQuit)),
            fault_tolerant: false,
        }
    }
}

impl TuiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw_mode(mut self, enabled: bool) -> Self {
        self.raw_mode = enabled;
        self
    }

    pub fn alternate_screen(mut self, enabled: bool) -> Self {
        self.alternate_screen = enabled;
        self
    }

    pub fn hide_cursor(mut self, enabled: bool) -> Self {
        self.hide_cursor = enabled;
        self
    }

    pub fn mouse_capture(mut self, enabled: bool) -> Self {
        self.mouse_capture = enabled;
        self
    }

    /// A non-positive timeout is replaced with the built-in default — a
    /// runner that never yields to let ticks/resizes through is a
    /// misconfiguration, not a valid "busy poll" request.
    pub fn poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = if timeout.is_zero() { DEFAULT_POLL_TIMEOUT } else { timeout };
        self
    }

    pub fn tick_rate(mut self, rate: Option<Duration>) -> Self {
        self.tick_rate = rate;
        self
    }

    pub fn shutdown_hook(mut self, enabled: bool) -> Self {
        self.shutdown_hook = enabled;
        self
    }

    pub fn error_output(mut self, stream: Stream) -> Self {
        self.error_output = stream;
        self
    }

    pub fn error_handler(mut self, handler: impl RenderErrorHandler + 'static) -> Self {
        self.error_handler = Box::new(handler);
        self
    }

    pub fn fault_tolerant(mut self, enabled: bool) -> Self {
        self.fault_tolerant = enabled;
        self
    }
}
