//! Stats, reset, and shell completions.

use clap::CommandFactory;
use clap_complete::generate;

use gymlog_core::WorkoutStore;

use crate::app::AppContext;
use crate::cli::{Cli, ResetArgs};
use crate::helpers::confirm;
use crate::output;

pub fn handle_stats(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let stats = store.stats()?;

    let mut table = output::table();
    table.set_header(["Collection", "Records"]);
    table.add_row(["Workouts".to_string(), stats.workout_count.to_string()]);
    table.add_row(["Exercises".to_string(), stats.exercise_count.to_string()]);
    table.add_row(["Templates".to_string(), stats.template_count.to_string()]);
    println!("{table}");
    Ok(())
}

pub fn handle_reset(ctx: &AppContext, args: &ResetArgs) -> anyhow::Result<()> {
    if !confirm(
        "Delete ALL workouts, exercises, and templates? This cannot be undone.",
        args.yes,
    )? {
        return Ok(());
    }

    let mut store = ctx.open_store()?;
    store.clear_all_data()?;
    output::success("All data deleted; starter content restored", ctx.quiet());
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "gymlog", &mut std::io::stdout());
    Ok(())
}
