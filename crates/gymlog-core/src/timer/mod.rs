//! Rest timer between sets.
//!
//! One `RestTimer` handle is created by the application and shared (it is
//! `Clone`; clones observe the same session). At most one session runs at a
//! time: starting while running cancels the previous session's ticker. The
//! timer keeps counting across screens until explicitly stopped.
//!
//! The 1 Hz ticker is a plain thread. Each started session carries a
//! generation number; the ticker re-checks the generation under the engine
//! lock before every tick, so a superseded or stopped session can never
//! deliver a stray tick.

mod alert;
mod engine;

pub use alert::{AlertSink, NullAlert};
pub use engine::{RestTimerState, TickOutcome};

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::thread;
use std::time::Duration;

use crate::error::{GymError, Result};

use engine::TimerEngine;

type Callback = Arc<dyn Fn(RestTimerState) + Send + Sync>;

struct Inner {
    engine: Mutex<TimerEngine>,
    subscribers: Mutex<HashMap<u64, Callback>>,
    next_token: AtomicU64,
    /// Bumped on every start/stop; a ticker thread only acts while its own
    /// generation is still current.
    generation: AtomicU64,
    alert: Box<dyn AlertSink>,
}

impl Inner {
    fn lock_engine(&self) -> MutexGuard<'_, TimerEngine> {
        self.engine.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn callbacks(&self) -> Vec<Callback> {
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect()
    }

    /// Deliver a snapshot to every subscriber. Callbacks run outside the
    /// engine and subscriber locks so they may call back into the timer.
    fn notify(&self, state: RestTimerState) {
        for callback in self.callbacks() {
            callback(state);
        }
    }

    /// Advance one second on behalf of ticker `generation`. Returns false
    /// once the generation has been superseded and the thread should exit.
    fn tick_for(&self, generation: u64) -> bool {
        let (outcome, state) = {
            let mut engine = self.lock_engine();
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            (engine.tick(), engine.state())
        };

        match outcome {
            TickOutcome::Idle => return false,
            TickOutcome::Threshold => self.alert.threshold_reached(&state),
            TickOutcome::Ticked => {}
        }
        self.notify(state);
        true
    }
}

/// Shared handle to the single rest-timer session.
#[derive(Clone)]
pub struct RestTimer {
    inner: Arc<Inner>,
}

impl RestTimer {
    pub fn new(alert: Box<dyn AlertSink>) -> Self {
        Self {
            inner: Arc::new(Inner {
                engine: Mutex::new(TimerEngine::new()),
                subscribers: Mutex::new(HashMap::new()),
                next_token: AtomicU64::new(0),
                generation: AtomicU64::new(0),
                alert,
            }),
        }
    }

    /// Timer with no threshold side effects (tests, headless use).
    pub fn with_null_alert() -> Self {
        Self::new(Box::new(NullAlert))
    }

    /// Start a rest session, cancelling any session already running.
    /// The preset must be a positive number of whole seconds.
    pub fn start(&self, preset_seconds: u32) -> Result<()> {
        let generation = self.begin(preset_seconds)?;

        let weak = Arc::downgrade(&self.inner);
        thread::Builder::new()
            .name("rest-timer-tick".to_string())
            .spawn(move || run_ticker(weak, generation))
            .map_err(|e| GymError::Storage(format!("Failed to spawn timer thread: {}", e)))?;

        Ok(())
    }

    /// Start a session without the background ticker. Pairs with `tick` for
    /// embedders driving their own clock.
    pub fn start_manual(&self, preset_seconds: u32) -> Result<()> {
        self.begin(preset_seconds)?;
        Ok(())
    }

    fn begin(&self, preset_seconds: u32) -> Result<u64> {
        if preset_seconds == 0 {
            return Err(GymError::InvalidInput(
                "Rest preset must be at least 1 second".to_string(),
            ));
        }

        let generation;
        let state;
        {
            let mut engine = self.inner.lock_engine();
            // Bumping under the engine lock retires any live ticker before
            // the new session becomes observable.
            generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
            engine.start(preset_seconds);
            state = engine.state();
        }
        self.inner.notify(state);
        Ok(generation)
    }

    /// Stop the current session. A no-op (no observer notification) when idle.
    pub fn stop(&self) {
        let was_running = {
            let mut engine = self.inner.lock_engine();
            self.inner.generation.fetch_add(1, Ordering::SeqCst);
            engine.stop()
        };
        if was_running {
            self.inner.notify(RestTimerState::IDLE);
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> RestTimerState {
        self.inner.lock_engine().state()
    }

    /// Advance the timer by one second without a ticker thread. Embedders
    /// driving their own clock use this instead of `start`'s ticker.
    pub fn tick(&self) -> TickOutcome {
        let (outcome, state) = {
            let mut engine = self.inner.lock_engine();
            (engine.tick(), engine.state())
        };
        if outcome == TickOutcome::Threshold {
            self.inner.alert.threshold_reached(&state);
        }
        if outcome != TickOutcome::Idle {
            self.inner.notify(state);
        }
        outcome
    }

    /// Register an observer called with the full state snapshot on every
    /// tick and on start/stop transitions. Dropping the returned
    /// subscription unregisters this observer only.
    pub fn subscribe<F>(&self, callback: F) -> TimerSubscription
    where
        F: Fn(RestTimerState) + Send + Sync + 'static,
    {
        let token = self.inner.next_token.fetch_add(1, Ordering::SeqCst);
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(token, Arc::new(callback));
        TimerSubscription {
            inner: Arc::downgrade(&self.inner),
            token,
        }
    }
}

fn run_ticker(weak: Weak<Inner>, generation: u64) {
    loop {
        thread::sleep(Duration::from_secs(1));
        let Some(inner) = weak.upgrade() else {
            return;
        };
        if !inner.tick_for(generation) {
            return;
        }
    }
}

/// Observer registration; unsubscribes on drop.
pub struct TimerSubscription {
    inner: Weak<Inner>,
    token: u64,
}

impl TimerSubscription {
    /// Explicit unsubscribe, equivalent to dropping.
    pub fn unsubscribe(self) {}
}

impl Drop for TimerSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner
                .subscribers
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .remove(&self.token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    struct CountingAlert(AtomicUsize);

    impl AlertSink for CountingAlert {
        fn threshold_reached(&self, _state: &RestTimerState) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_stop_while_idle_is_silent() {
        let timer = RestTimer::with_null_alert();
        let notifications = Arc::new(AtomicUsize::new(0));
        let seen = notifications.clone();
        let _sub = timer.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        timer.stop();
        assert_eq!(notifications.load(Ordering::SeqCst), 0);
        assert!(!timer.state().running);
    }

    #[test]
    fn test_subscribers_receive_full_snapshots() {
        let timer = RestTimer::with_null_alert();
        let states = Arc::new(Mutex::new(Vec::new()));
        let sink = states.clone();
        let _sub = timer.subscribe(move |state| {
            sink.lock().unwrap().push(state);
        });

        timer.start_manual(120).expect("start should succeed");
        timer.tick();
        timer.stop();

        let states = states.lock().unwrap();
        assert_eq!(states.len(), 3);
        assert!(states[0].running && states[0].elapsed_seconds == 0);
        assert!(states[1].running && states[1].elapsed_seconds == 1);
        assert_eq!(states[2], RestTimerState::IDLE);
    }

    #[test]
    fn test_unsubscribe_leaves_other_observers_live() {
        let timer = RestTimer::with_null_alert();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let first_sink = first.clone();
        let sub_first = timer.subscribe(move |_| {
            first_sink.fetch_add(1, Ordering::SeqCst);
        });
        let second_sink = second.clone();
        let _sub_second = timer.subscribe(move |_| {
            second_sink.fetch_add(1, Ordering::SeqCst);
        });

        timer.start_manual(60).expect("start should succeed");
        sub_first.unsubscribe();
        timer.tick();
        timer.stop();

        assert_eq!(first.load(Ordering::SeqCst), 1); // only the start snapshot
        assert_eq!(second.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_threshold_alert_fires_once_and_timer_keeps_running() {
        let alert = Arc::new(CountingAlert(AtomicUsize::new(0)));
        struct Fwd(Arc<CountingAlert>);
        impl AlertSink for Fwd {
            fn threshold_reached(&self, state: &RestTimerState) {
                self.0.threshold_reached(state);
            }
        }
        let timer = RestTimer::new(Box::new(Fwd(alert.clone())));

        timer.start_manual(60).expect("start should succeed");
        for _ in 0..75 {
            timer.tick();
        }

        let state = timer.state();
        assert!(state.running);
        assert_eq!(state.elapsed_seconds, 75);
        assert_eq!(alert.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_restart_supersedes_previous_session() {
        let timer = RestTimer::with_null_alert();
        timer.start_manual(30).expect("start should succeed");
        timer.tick();
        timer.start_manual(90).expect("restart should succeed");

        let state = timer.state();
        assert_eq!(state.preset_seconds, 90);
        assert_eq!(state.elapsed_seconds, 0);
        assert!(!state.notified);
        timer.stop();
    }

    #[test]
    fn test_ticker_is_single_after_restart() {
        let timer = RestTimer::with_null_alert();
        let ticks = Arc::new(AtomicUsize::new(0));
        let sink = ticks.clone();
        // Count only tick deliveries, not the start/stop snapshots.
        let _sub = timer.subscribe(move |state| {
            if state.running && state.elapsed_seconds > 0 {
                sink.fetch_add(1, Ordering::SeqCst);
            }
        });

        timer.start(60).expect("start should succeed");
        timer.start(60).expect("restart should succeed");
        thread::sleep(Duration::from_millis(2500));
        timer.stop();

        // One 1 Hz ticker delivers 2 ticks in 2.5 s (3 with scheduling
        // jitter). A leaked ticker from the first session would double that.
        let seen = ticks.load(Ordering::SeqCst);
        assert!((1..=3).contains(&seen), "expected 1..=3 ticks, saw {}", seen);

        // Stop retires the ticker; nothing arrives afterwards.
        thread::sleep(Duration::from_millis(1200));
        assert_eq!(ticks.load(Ordering::SeqCst), seen);
    }
}
