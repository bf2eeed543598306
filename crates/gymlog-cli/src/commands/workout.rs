//! Draft workout lifecycle: start, add sets, show, finish, cancel.

use chrono::Utc;

use gymlog_core::WorkoutStore;

use crate::app::AppContext;
use crate::cli::{WorkoutAddArgs, WorkoutCancelArgs, WorkoutFinishArgs, WorkoutStartArgs};
use crate::draft::DraftWorkout;
use crate::helpers::{confirm, parse_date, parse_set_spec};
use crate::output;

pub fn handle_start(ctx: &AppContext, args: &WorkoutStartArgs) -> anyhow::Result<()> {
    let draft_path = ctx.draft_path();
    if DraftWorkout::load(&draft_path)?.is_some() {
        return Err(anyhow::anyhow!(
            "A workout is already in progress. Finish it with `gymlog workout finish` \
             or discard it with `gymlog workout cancel`."
        ));
    }

    let date = match args.date {
        Some(ref value) => parse_date(value)?,
        None => Utc::now().date_naive(),
    };

    let mut draft = DraftWorkout::new(args.name.clone(), date);

    if let Some(ref template_name) = args.template {
        let mut store = ctx.open_store()?;
        let template = store
            .get_template_by_name(template_name)?
            .ok_or_else(|| anyhow::anyhow!("Template \"{}\" not found", template_name))?;
        draft.exercises = template
            .exercise_names
            .iter()
            .map(gymlog_core::models::ExerciseEntry::new)
            .collect();
        if draft.name.is_none() {
            draft.name = Some(template.name.clone());
        }
        store.record_template_use(template.id)?;
    }

    draft.save(&draft_path)?;

    let label = draft.name.clone().unwrap_or_else(|| "workout".to_string());
    output::success(&format!("Started {} on {}", label, draft.date), ctx.quiet());
    if !ctx.quiet() && !draft.exercises.is_empty() {
        for entry in &draft.exercises {
            println!("  - {}", entry.exercise_name);
        }
    }
    Ok(())
}

pub fn handle_add(ctx: &AppContext, args: &WorkoutAddArgs) -> anyhow::Result<()> {
    let draft_path = ctx.draft_path();
    let mut draft = DraftWorkout::load(&draft_path)?.ok_or_else(|| {
        anyhow::anyhow!("No workout in progress. Start one with `gymlog workout start`.")
    })?;

    let store = ctx.open_store()?;
    let exercise = store
        .get_exercise_by_name(&args.exercise)?
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Exercise \"{}\" is not in the library.\nHint: add it with `gymlog exercise add \"{}\" <category>`.",
                args.exercise,
                args.exercise
            )
        })?;

    let settings = ctx.load_settings()?;
    let set = parse_set_spec(&args.set, exercise.exercise_type, &settings)?;
    draft.add_set(&exercise.name, set.clone(), args.note.as_deref());
    draft.save(&draft_path)?;

    output::success(
        &format!(
            "{}: set {} ({})",
            exercise.name,
            draft
                .exercises
                .iter()
                .find(|e| e.exercise_name == exercise.name)
                .map(|e| e.sets.len())
                .unwrap_or(0),
            output::set_summary(&set, settings.weight_unit)
        ),
        ctx.quiet(),
    );
    Ok(())
}

pub fn handle_show(ctx: &AppContext) -> anyhow::Result<()> {
    let draft = DraftWorkout::load(&ctx.draft_path())?.ok_or_else(|| {
        anyhow::anyhow!("No workout in progress. Start one with `gymlog workout start`.")
    })?;

    let settings = ctx.load_settings()?;
    let elapsed = (Utc::now() - draft.start_time).num_minutes().max(0);
    if !ctx.quiet() {
        let label = draft.name.clone().unwrap_or_else(|| "Workout".to_string());
        println!("{} \u{00B7} {} (in progress, {} min)", label, draft.date, elapsed);
    }

    if draft.exercises.is_empty() {
        println!("(no sets logged)");
        return Ok(());
    }
    for entry in &draft.exercises {
        println!("{}", entry.exercise_name);
        for (index, set) in entry.sets.iter().enumerate() {
            println!(
                "  {}. {}",
                index + 1,
                output::set_summary(set, settings.weight_unit)
            );
        }
        if !entry.notes.is_empty() {
            println!("  note: {}", entry.notes);
        }
    }
    Ok(())
}

pub fn handle_finish(ctx: &AppContext, args: &WorkoutFinishArgs) -> anyhow::Result<()> {
    let draft_path = ctx.draft_path();
    let mut draft = DraftWorkout::load(&draft_path)?.ok_or_else(|| {
        anyhow::anyhow!("No workout in progress. Start one with `gymlog workout start`.")
    })?;

    if let Some(ref notes) = args.notes {
        draft.notes = notes.clone();
    }

    // Entries that never received a set are dropped rather than persisted.
    draft.exercises.retain(|entry| !entry.sets.is_empty());
    if draft.exercises.is_empty() {
        return Err(anyhow::anyhow!(
            "The draft has no sets. Add one with `gymlog workout add`, or discard \
             the draft with `gymlog workout cancel`."
        ));
    }

    let exercise_names: Vec<String> = draft
        .exercises
        .iter()
        .map(|entry| entry.exercise_name.clone())
        .collect();
    let workout = draft.into_new_workout(Utc::now());
    let duration = workout.duration_min.unwrap_or(0);

    let mut store = ctx.open_store()?;
    let id = store.insert_workout(&workout)?;
    for name in &exercise_names {
        store.record_exercise_use(name)?;
    }
    DraftWorkout::discard(&draft_path)?;

    output::success(
        &format!(
            "Saved workout #{} ({} exercises, {} min)",
            id,
            exercise_names.len(),
            duration
        ),
        ctx.quiet(),
    );
    Ok(())
}

pub fn handle_cancel(ctx: &AppContext, args: &WorkoutCancelArgs) -> anyhow::Result<()> {
    let draft_path = ctx.draft_path();
    let draft = DraftWorkout::load(&draft_path)?
        .ok_or_else(|| anyhow::anyhow!("No workout in progress."))?;

    let prompt = format!("Discard the draft with {} set(s)?", draft.set_count());
    if !confirm(&prompt, args.yes)? {
        return Ok(());
    }

    DraftWorkout::discard(&draft_path)?;
    output::success("Draft discarded", ctx.quiet());
    Ok(())
}
