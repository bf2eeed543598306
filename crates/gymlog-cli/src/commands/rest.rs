//! Interactive rest timer.
//!
//! Starts a timer session, renders a live progress bar from a timer
//! subscription, and rings the terminal bell when the preset elapses. The
//! timer keeps counting past the preset until the user presses Enter.

use std::io::{self, BufRead, Write};

use indicatif::{ProgressBar, ProgressStyle};

use gymlog_core::timer::{AlertSink, RestTimerState};
use gymlog_core::RestTimer;

use crate::app::AppContext;
use crate::cli::RestArgs;
use crate::helpers::format_duration;
use crate::output;

/// Rings the terminal bell when the rest period elapses.
struct BellAlert;

impl AlertSink for BellAlert {
    fn threshold_reached(&self, _state: &RestTimerState) {
        let mut stderr = io::stderr();
        if let Err(e) = stderr.write_all(b"\x07").and_then(|_| stderr.flush()) {
            tracing::warn!("failed to ring terminal bell: {}", e);
        }
    }
}

pub fn handle_rest(ctx: &AppContext, args: &RestArgs) -> anyhow::Result<()> {
    let settings = ctx.load_settings()?;
    let preset = args.seconds.unwrap_or(settings.default_rest_seconds);

    let bar = ProgressBar::new(u64::from(preset));
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:30}] {pos}/{len}s")
            .expect("progress template is valid")
            .progress_chars("=> "),
    );
    bar.set_message("Resting");

    let timer = RestTimer::new(Box::new(BellAlert));
    let display = bar.clone();
    let subscription = timer.subscribe(move |state| {
        if !state.running {
            return;
        }
        display.set_position(u64::from(state.elapsed_seconds.min(state.preset_seconds)));
        if state.elapsed_seconds >= state.preset_seconds {
            display.set_message(format!(
                "Rested (+{})",
                format_duration(state.elapsed_seconds - state.preset_seconds)
            ));
        }
    });
    timer.start(preset)?;

    if !ctx.quiet() {
        eprintln!("Press Enter to stop.");
    }
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let elapsed = timer.state().elapsed_seconds;
    timer.stop();
    subscription.unsubscribe();
    bar.finish_and_clear();

    output::success(
        &format!("Rested {} (preset {})", format_duration(elapsed), format_duration(preset)),
        ctx.quiet(),
    );
    Ok(())
}
