//! Built-in starter content.
//!
//! Used both to seed an empty database and to backfill categories on
//! records created before the category column existed.

use crate::models::{ExerciseCategory, ExerciseType};

/// A starter exercise bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct StarterExercise {
    pub name: &'static str,
    pub category: ExerciseCategory,
    pub exercise_type: ExerciseType,
}

const fn strength(name: &'static str, category: ExerciseCategory) -> StarterExercise {
    StarterExercise {
        name,
        category,
        exercise_type: ExerciseType::Strength,
    }
}

const fn bodyweight(name: &'static str, category: ExerciseCategory) -> StarterExercise {
    StarterExercise {
        name,
        category,
        exercise_type: ExerciseType::Bodyweight,
    }
}

pub const STARTER_EXERCISES: &[StarterExercise] = &[
    strength("Bench Press", ExerciseCategory::Push),
    strength("Overhead Press", ExerciseCategory::Push),
    strength("Incline Dumbbell Press", ExerciseCategory::Push),
    bodyweight("Push-Up", ExerciseCategory::Push),
    bodyweight("Dip", ExerciseCategory::Push),
    strength("Deadlift", ExerciseCategory::Pull),
    strength("Barbell Row", ExerciseCategory::Pull),
    strength("Lat Pulldown", ExerciseCategory::Pull),
    bodyweight("Pull-Up", ExerciseCategory::Pull),
    strength("Face Pull", ExerciseCategory::Pull),
    strength("Squat", ExerciseCategory::Legs),
    strength("Front Squat", ExerciseCategory::Legs),
    strength("Romanian Deadlift", ExerciseCategory::Legs),
    strength("Leg Press", ExerciseCategory::Legs),
    strength("Calf Raise", ExerciseCategory::Legs),
    strength("Barbell Curl", ExerciseCategory::Arms),
    strength("Tricep Pushdown", ExerciseCategory::Arms),
    bodyweight("Plank", ExerciseCategory::Core),
    bodyweight("Hanging Leg Raise", ExerciseCategory::Core),
];

/// A starter template bundled with the application. Starter templates are
/// marked as such in the store and cannot be deleted.
#[derive(Debug, Clone, Copy)]
pub struct StarterTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub exercise_names: &'static [&'static str],
}

pub const STARTER_TEMPLATES: &[StarterTemplate] = &[
    StarterTemplate {
        name: "Push Day",
        description: "Chest, shoulders, and triceps",
        exercise_names: &[
            "Bench Press",
            "Overhead Press",
            "Incline Dumbbell Press",
            "Tricep Pushdown",
        ],
    },
    StarterTemplate {
        name: "Pull Day",
        description: "Back and biceps",
        exercise_names: &["Deadlift", "Barbell Row", "Lat Pulldown", "Barbell Curl"],
    },
    StarterTemplate {
        name: "Leg Day",
        description: "Quads, hamstrings, and calves",
        exercise_names: &["Squat", "Romanian Deadlift", "Leg Press", "Calf Raise"],
    },
    StarterTemplate {
        name: "Full Body",
        description: "One compound lift per movement pattern",
        exercise_names: &["Squat", "Bench Press", "Barbell Row", "Plank"],
    },
];
