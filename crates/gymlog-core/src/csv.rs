//! CSV export of workout history.
//!
//! One row per set. Fields a set shape does not carry are emitted empty;
//! the Notes column combines workout and exercise notes. Quoting follows
//! RFC 4180: fields containing a comma, quote, CR/LF, or leading/trailing
//! whitespace are wrapped in quotes with internal quotes doubled.

use crate::models::{Set, Workout};

const HEADERS: [&str; 9] = [
    "Workout Name",
    "Date",
    "Exercise",
    "Set",
    "Weight",
    "Reps",
    "RPE",
    "Rest",
    "Notes",
];

/// Render all workouts as a CSV document, one row per set.
pub fn workouts_to_csv(workouts: &[Workout]) -> String {
    let mut rows = vec![HEADERS.join(",")];

    for workout in workouts {
        let workout_name = workout.name.as_deref().unwrap_or("");
        let date = workout.date.format("%Y-%m-%d").to_string();

        for exercise in &workout.exercises {
            let combined_notes: String = [workout.notes.as_str(), exercise.notes.as_str()]
                .iter()
                .filter(|n| !n.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" | ");

            for (index, set) in exercise.sets.iter().enumerate() {
                let (weight, reps, rpe, rest) = set_columns(set);
                let row = [
                    escape_field(workout_name),
                    escape_field(&date),
                    escape_field(&exercise.exercise_name),
                    (index + 1).to_string(),
                    weight,
                    reps,
                    rpe,
                    rest,
                    escape_field(&combined_notes),
                ];
                rows.push(row.join(","));
            }
        }
    }

    rows.join("\n")
}

fn set_columns(set: &Set) -> (String, String, String, String) {
    match set {
        Set::Strength {
            weight,
            reps,
            rpe,
            rest_seconds,
        } => (
            format_weight(*weight),
            reps.to_string(),
            rpe.to_string(),
            rest_seconds.to_string(),
        ),
        Set::Bodyweight { reps, rest_seconds } => (
            String::new(),
            reps.to_string(),
            String::new(),
            rest_seconds.to_string(),
        ),
        Set::Cardio { .. } => (String::new(), String::new(), String::new(), String::new()),
    }
}

fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{}", weight as i64)
    } else {
        format!("{}", weight)
    }
}

fn escape_field(field: &str) -> String {
    let needs_quoting = field.contains(',')
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r')
        || field != field.trim();

    if !needs_quoting {
        return field.to_string();
    }
    format!("\"{}\"", field.replace('"', "\"\""))
}
