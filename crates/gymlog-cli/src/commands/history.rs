//! Persisted workout history: list, show, edit, delete.

use gymlog_core::WorkoutStore;

use crate::app::AppContext;
use crate::cli::{HistoryDeleteArgs, HistoryEditArgs, HistoryListArgs, HistoryShowArgs};
use crate::helpers::{confirm, parse_date};
use crate::output;

const DEFAULT_LIST_LIMIT: usize = 20;

pub fn handle_list(ctx: &AppContext, args: &HistoryListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    let mut workouts = match args.date {
        Some(ref value) => store.workouts_by_date(parse_date(value)?)?,
        None => store.list_workouts()?,
    };

    // The store imposes no ordering; history reads newest first.
    workouts.sort_by(|a, b| b.start_time.cmp(&a.start_time));
    workouts.truncate(args.limit.unwrap_or(DEFAULT_LIST_LIMIT));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&workouts)?);
    } else {
        output::print_workout_list(&workouts, ctx.quiet());
    }
    Ok(())
}

pub fn handle_show(ctx: &AppContext, args: &HistoryShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let workout = store
        .get_workout(args.id)?
        .ok_or_else(|| anyhow::anyhow!("Workout #{} not found", args.id))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&workout)?);
    } else {
        let settings = ctx.load_settings()?;
        output::print_workout_detail(&workout, settings.weight_unit, ctx.quiet());
    }
    Ok(())
}

pub fn handle_edit(ctx: &AppContext, args: &HistoryEditArgs) -> anyhow::Result<()> {
    if args.name.is_none() && args.date.is_none() && args.notes.is_none() {
        return Err(anyhow::anyhow!(
            "Nothing to change. Pass --name, --date, or --notes."
        ));
    }

    let mut store = ctx.open_store()?;
    let mut workout = store
        .get_workout(args.id)?
        .ok_or_else(|| anyhow::anyhow!("Workout #{} not found", args.id))?;

    if let Some(ref name) = args.name {
        workout.name = if name.is_empty() {
            None
        } else {
            Some(name.clone())
        };
    }
    if let Some(ref date) = args.date {
        workout.date = parse_date(date)?;
    }
    if let Some(ref notes) = args.notes {
        workout.notes = notes.clone();
    }

    store.update_workout(&workout)?;
    output::success(&format!("Updated workout #{}", workout.id), ctx.quiet());
    Ok(())
}

pub fn handle_delete(ctx: &AppContext, args: &HistoryDeleteArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let workout = store
        .get_workout(args.id)?
        .ok_or_else(|| anyhow::anyhow!("Workout #{} not found", args.id))?;

    let label = workout
        .name
        .clone()
        .map(|name| format!("\"{}\"", name))
        .unwrap_or_else(|| format!("#{}", workout.id));
    if !confirm(&format!("Delete workout {} ({})?", label, workout.date), args.yes)? {
        return Ok(());
    }

    store.delete_workout(args.id)?;
    output::success(&format!("Deleted workout #{}", args.id), ctx.quiet());
    Ok(())
}
