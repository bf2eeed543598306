//! Threshold alert seam.
//!
//! What happens when the rest period elapses depends on the host: a terminal
//! can ring the bell, a daemon might post a notification, tests want nothing
//! at all. The timer only knows this trait.

use super::engine::RestTimerState;

/// Side-effect hook fired when elapsed time first reaches the preset.
///
/// Calls are fire-and-forget from the tick loop: implementations must
/// capture their own failures (log them via `tracing`) and must not panic.
/// A sink that can do nothing useful should simply return.
pub trait AlertSink: Send + Sync {
    fn threshold_reached(&self, state: &RestTimerState);
}

/// Alert sink that does nothing. Used in tests and headless embeddings.
#[derive(Debug, Default)]
pub struct NullAlert;

impl AlertSink for NullAlert {
    fn threshold_reached(&self, _state: &RestTimerState) {}
}
