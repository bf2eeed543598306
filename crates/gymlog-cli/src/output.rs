//! Table and status-line rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use owo_colors::OwoColorize;

use gymlog_core::models::{LibraryExercise, Set, Workout, WorkoutTemplate};
use gymlog_core::settings::WeightUnit;

use crate::helpers::format_duration;

/// Base table with the house style applied.
pub fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Green check status line, suppressed in quiet mode.
pub fn success(message: &str, quiet: bool) {
    if !quiet {
        println!("{} {}", "\u{2713}".green(), message);
    }
}

pub fn print_workout_list(workouts: &[Workout], quiet: bool) {
    if workouts.is_empty() {
        if !quiet {
            println!("No workouts logged yet.");
        }
        return;
    }

    let mut table = table();
    table.set_header(["ID", "Date", "Name", "Duration", "Exercises", "Sets"]);
    for workout in workouts {
        let sets: usize = workout.exercises.iter().map(|e| e.sets.len()).sum();
        table.add_row([
            workout.id.to_string(),
            workout.date.to_string(),
            workout.name.clone().unwrap_or_default(),
            workout
                .duration_min
                .map(|m| format!("{} min", m))
                .unwrap_or_default(),
            workout.exercises.len().to_string(),
            sets.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn print_workout_detail(workout: &Workout, unit: WeightUnit, quiet: bool) {
    if !quiet {
        let name = workout.name.as_deref().unwrap_or("Workout");
        println!("{} \u{00B7} {} (#{})", name.bold(), workout.date, workout.id);
        if let Some(minutes) = workout.duration_min {
            println!("Duration: {} min", minutes);
        }
        if !workout.notes.is_empty() {
            println!("Notes: {}", workout.notes);
        }
    }

    if workout.exercises.is_empty() {
        println!("(no sets logged)");
        return;
    }

    let mut table = table();
    table.set_header(["Exercise", "Set", "Details", "Rest"]);
    for entry in &workout.exercises {
        for (index, set) in entry.sets.iter().enumerate() {
            table.add_row([
                if index == 0 {
                    entry.exercise_name.clone()
                } else {
                    String::new()
                },
                (index + 1).to_string(),
                set_summary(set, unit),
                set.rest_seconds()
                    .map(format_duration)
                    .unwrap_or_default(),
            ]);
        }
        if entry.sets.is_empty() {
            table.add_row([entry.exercise_name.clone(), String::new(), String::new(), String::new()]);
        }
    }
    println!("{table}");
}

pub fn print_exercise_list(exercises: &[LibraryExercise], quiet: bool) {
    if exercises.is_empty() {
        if !quiet {
            println!("No exercises found.");
        }
        return;
    }

    let mut table = table();
    table.set_header(["Name", "Category", "Type", "Uses", "Links"]);
    for exercise in exercises {
        table.add_row([
            exercise.name.clone(),
            exercise.category.as_str().to_string(),
            exercise.exercise_type.as_str().to_string(),
            exercise.use_count.to_string(),
            if exercise.video_links.is_empty() {
                String::new()
            } else {
                exercise.video_links.len().to_string()
            },
        ]);
    }
    println!("{table}");
}

pub fn print_template_list(templates: &[WorkoutTemplate], quiet: bool) {
    if templates.is_empty() {
        if !quiet {
            println!("No templates found.");
        }
        return;
    }

    let mut table = table();
    table.set_header(["Name", "Exercises", "Uses", "Starter"]);
    for template in templates {
        table.add_row([
            template.name.clone(),
            template.exercise_names.len().to_string(),
            template.use_count.to_string(),
            if template.is_starter {
                "yes".to_string()
            } else {
                String::new()
            },
        ]);
    }
    println!("{table}");
}

pub fn print_template_detail(template: &WorkoutTemplate) {
    println!("{}", template.name.bold());
    if !template.description.is_empty() {
        println!("{}", template.description);
    }
    for (index, name) in template.exercise_names.iter().enumerate() {
        println!("  {}. {}", index + 1, name);
    }
    if template.use_count > 0 {
        println!("Used {} time(s)", template.use_count);
    }
}

/// One-line summary of a set, e.g. "135 lbs x 5 @ RPE 80".
pub fn set_summary(set: &Set, unit: WeightUnit) -> String {
    match set {
        Set::Strength { weight, reps, rpe, .. } => {
            format!(
                "{} {} x {} @ RPE {}",
                format_weight(*weight),
                unit.as_str(),
                reps,
                rpe
            )
        }
        Set::Bodyweight { reps, .. } => format!("{} reps", reps),
        Set::Cardio { duration_seconds } => format_duration(*duration_seconds),
    }
}

/// Trim a trailing ".0" from whole-number weights.
fn format_weight(weight: f64) -> String {
    let formatted = format!("{:.1}", weight);
    formatted
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_summary_by_shape() {
        let strength = Set::Strength {
            weight: 135.0,
            reps: 5,
            rpe: 80,
            rest_seconds: 90,
        };
        assert_eq!(set_summary(&strength, WeightUnit::Lbs), "135 lbs x 5 @ RPE 80");

        let bodyweight = Set::Bodyweight {
            reps: 12,
            rest_seconds: 60,
        };
        assert_eq!(set_summary(&bodyweight, WeightUnit::Lbs), "12 reps");

        let cardio = Set::Cardio {
            duration_seconds: 1200,
        };
        assert_eq!(set_summary(&cardio, WeightUnit::Kg), "20:00");
    }

    #[test]
    fn test_format_weight_trims_whole_numbers() {
        assert_eq!(format_weight(135.0), "135");
        assert_eq!(format_weight(62.5), "62.5");
    }
}
