//! Exercise library management.

use gymlog_core::models::{ExerciseCategory, ExerciseType, NewExercise, VideoLink};
use gymlog_core::WorkoutStore;

use crate::app::AppContext;
use crate::cli::{
    ExerciseAddArgs, ExerciseDeleteArgs, ExerciseLinkArgs, ExerciseListArgs, ExerciseSearchArgs,
};
use crate::helpers::confirm;
use crate::output;

pub fn handle_list(ctx: &AppContext, args: &ExerciseListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let mut exercises = store.list_exercises()?;

    if let Some(ref category) = args.category {
        let category = ExerciseCategory::parse(category)?;
        exercises.retain(|exercise| exercise.category == category);
    }

    // Most used first, ties by name.
    exercises.sort_by(|a, b| {
        b.use_count
            .cmp(&a.use_count)
            .then_with(|| a.name.cmp(&b.name))
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&exercises)?);
    } else {
        output::print_exercise_list(&exercises, ctx.quiet());
    }
    Ok(())
}

pub fn handle_add(ctx: &AppContext, args: &ExerciseAddArgs) -> anyhow::Result<()> {
    if args.name.trim().is_empty() {
        return Err(anyhow::anyhow!("Exercise name is empty"));
    }
    let category = ExerciseCategory::parse(&args.category)?;
    let exercise_type = ExerciseType::parse(&args.r#type)?;

    let mut store = ctx.open_store()?;
    let exercise = NewExercise::new(args.name.trim(), category).with_type(exercise_type);
    store.insert_exercise(&exercise)?;

    output::success(
        &format!("Added {} ({}, {})", exercise.name, category.as_str(), exercise_type.as_str()),
        ctx.quiet(),
    );
    Ok(())
}

pub fn handle_delete(ctx: &AppContext, args: &ExerciseDeleteArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let exercise = store
        .get_exercise_by_name(&args.name)?
        .ok_or_else(|| anyhow::anyhow!("Exercise \"{}\" not found", args.name))?;

    if !confirm(&format!("Delete exercise \"{}\"?", exercise.name), args.yes)? {
        return Ok(());
    }

    store.delete_exercise(exercise.id)?;
    output::success(&format!("Deleted {}", exercise.name), ctx.quiet());
    Ok(())
}

pub fn handle_search(ctx: &AppContext, args: &ExerciseSearchArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let mut results = store.search_exercises(&args.query)?;
    results.sort_by(|a, b| a.name.cmp(&b.name));
    output::print_exercise_list(&results, ctx.quiet());
    Ok(())
}

pub fn handle_link(ctx: &AppContext, args: &ExerciseLinkArgs) -> anyhow::Result<()> {
    let link = VideoLink::new(args.title.clone(), args.url.clone())?;

    let mut store = ctx.open_store()?;
    let mut exercise = store
        .get_exercise_by_name(&args.name)?
        .ok_or_else(|| anyhow::anyhow!("Exercise \"{}\" not found", args.name))?;

    exercise.video_links.push(link);
    store.update_exercise(&exercise)?;

    output::success(
        &format!("Linked \"{}\" to {}", args.title, exercise.name),
        ctx.quiet(),
    );
    Ok(())
}
