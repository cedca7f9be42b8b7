//! Synthesized tick and resize events.

use std::time::Duration;

/// Synthesized on a fixed cadence by the runner, independent of input
/// activity, when `TuiConfig::tick_rate` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickEvent {
    pub frame_count: u64,
    pub elapsed: Duration,
}

/// Synthesized when the backend reports a terminal resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeEvent {
    pub width: u16,
    pub height: u16,
}
