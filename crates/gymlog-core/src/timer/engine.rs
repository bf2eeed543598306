//! Pure rest-timer state machine.
//!
//! The engine is clock-free: something else (the `RestTimer` ticker thread,
//! or a test) calls `tick` once per elapsed second. The timer counts up past
//! the preset indefinitely and reports the threshold crossing exactly once;
//! only `stop` returns it to idle.

/// Outcome of advancing the engine by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No session running; nothing happened.
    Idle,
    /// One second counted.
    Ticked,
    /// One second counted and elapsed time first reached the preset.
    Threshold,
}

/// Snapshot of the timer, delivered whole to every observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestTimerState {
    pub running: bool,
    /// Target rest period in seconds; 0 when idle.
    pub preset_seconds: u32,
    pub elapsed_seconds: u32,
    /// Whether the threshold alert has already fired this session.
    pub notified: bool,
}

impl RestTimerState {
    pub const IDLE: RestTimerState = RestTimerState {
        running: false,
        preset_seconds: 0,
        elapsed_seconds: 0,
        notified: false,
    };

    /// Seconds left until the preset, saturating at zero once passed.
    pub fn remaining_seconds(&self) -> u32 {
        self.preset_seconds.saturating_sub(self.elapsed_seconds)
    }
}

#[derive(Debug)]
pub(crate) struct TimerEngine {
    state: RestTimerState,
}

impl TimerEngine {
    pub(crate) fn new() -> Self {
        Self {
            state: RestTimerState::IDLE,
        }
    }

    pub(crate) fn state(&self) -> RestTimerState {
        self.state
    }

    /// Begin a session. Any prior session is discarded.
    pub(crate) fn start(&mut self, preset_seconds: u32) {
        self.state = RestTimerState {
            running: true,
            preset_seconds,
            elapsed_seconds: 0,
            notified: false,
        };
    }

    /// Return to idle. Reports whether a session was actually running, so
    /// callers can skip observer notification on a no-op stop.
    pub(crate) fn stop(&mut self) -> bool {
        let was_running = self.state.running;
        self.state = RestTimerState::IDLE;
        was_running
    }

    /// Advance one second.
    pub(crate) fn tick(&mut self) -> TickOutcome {
        if !self.state.running {
            return TickOutcome::Idle;
        }
        self.state.elapsed_seconds += 1;
        if self.state.elapsed_seconds == self.state.preset_seconds && !self.state.notified {
            self.state.notified = true;
            return TickOutcome::Threshold;
        }
        TickOutcome::Ticked
    }
}
