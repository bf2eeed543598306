//! CSV export of workout history.

use std::fs;

use gymlog_core::csv::workouts_to_csv;
use gymlog_core::WorkoutStore;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::helpers::parse_date;
use crate::output;

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let mut workouts = store.list_workouts()?;

    if let Some(ref since) = args.since {
        let since = parse_date(since)?;
        workouts.retain(|workout| workout.date >= since);
    }
    workouts.sort_by(|a, b| a.start_time.cmp(&b.start_time));

    let csv = workouts_to_csv(&workouts);
    match args.output {
        Some(ref path) => {
            fs::write(path, &csv)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path, e))?;
            output::success(
                &format!("Exported {} workout(s) to {}", workouts.len(), path),
                ctx.quiet(),
            );
        }
        None => {
            print!("{}", csv);
        }
    }
    Ok(())
}
