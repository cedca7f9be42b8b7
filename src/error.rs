//! Crate-wide fault tolerance: what happens when a render closure panics
//! or a widget's render returns an error, instead of taking the whole
//! process down mid-frame.

use std::panic::{catch_unwind, AssertUnwindSafe};

/// A single render failure captured at its boundary: what the panic
/// payload said, and when it happened relative to process start.
#[derive(Debug, thiserror::Error)]
#[error("render failed: {message}")]
pub struct RenderFailure {
    pub message: String,
    pub elapsed: std::time::Duration,
}

impl RenderFailure {
    fn from_panic(payload: Box<dyn std::any::Any + Send>, started_at: std::time::Instant) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "render panicked with a non-string payload".to_string());
        Self { message, elapsed: started_at.elapsed() }
    }
}

/// What [`TuiRunner`](crate::runner::TuiRunner) does after a render
/// boundary reports a [`RenderFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorAction {
    /// Tear down the terminal and propagate the failure immediately,
    /// without drawing anything further.
    QuitImmediately,
    /// Render one last frame describing the failure, then quit.
    #[default]
    DisplayAndQuit,
    /// Log the failure and keep running with the previous frame shown.
    Suppress,
}

/// Decides what a runner should do with a captured [`RenderFailure`].
///
/// The default handler ([`ErrorAction::DisplayAndQuit`]) is conservative:
/// fault-tolerant rendering is opt-in per [`crate::runner::TuiConfig`],
/// not a license to keep running after something has gone visibly wrong.
pub trait RenderErrorHandler {
    fn handle(&mut self, failure: &RenderFailure) -> ErrorAction;
}

impl<F> RenderErrorHandler for F
where
    F: FnMut(&RenderFailure) -> ErrorAction,
{
    fn handle(&mut self, failure: &RenderFailure) -> ErrorAction {
        self(failure)
    }
}

/// A [`RenderErrorHandler`] that always returns the same fixed action.
#[derive(Debug, Clone, Copy)]
pub struct FixedErrorHandler(pub ErrorAction);

impl RenderErrorHandler for FixedErrorHandler {
    fn handle(&mut self, _failure: &RenderFailure) -> ErrorAction {
        self.0
    }
}

/// Run `body` at a fault-isolation boundary: a panic inside it is caught
/// and turned into a [`RenderFailure`] rather than unwinding into the
/// runner's own control flow. This is the single place in the crate that
/// calls [`catch_unwind`] — per-widget isolation is built by nesting
/// calls to this function around individual subtrees, not by catching
/// panics anywhere else.
pub fn isolate_render<T>(body: impl FnOnce() -> T) -> Result<T, RenderFailure> {
    let started_at = std::time::Instant::now();
    catch_unwind(AssertUnwindSafe(body)).map_err(|payload| RenderFailure::from_panic(payload, started_at))
}
