//! Core data types for the workout log.
//!
//! These types represent the stable data model shared by the store, the CSV
//! exporter, and the CLI. Records own their identifiers only after the store
//! has assigned them; the `New*` builders describe records before insertion.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GymError, Result};

/// Broad movement category for a library exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseCategory {
    Push,
    Pull,
    Legs,
    Arms,
    Core,
    Other,
}

impl ExerciseCategory {
    pub const ALL: [ExerciseCategory; 6] = [
        ExerciseCategory::Push,
        ExerciseCategory::Pull,
        ExerciseCategory::Legs,
        ExerciseCategory::Arms,
        ExerciseCategory::Core,
        ExerciseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseCategory::Push => "Push",
            ExerciseCategory::Pull => "Pull",
            ExerciseCategory::Legs => "Legs",
            ExerciseCategory::Arms => "Arms",
            ExerciseCategory::Core => "Core",
            ExerciseCategory::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "push" => Ok(ExerciseCategory::Push),
            "pull" => Ok(ExerciseCategory::Pull),
            "legs" => Ok(ExerciseCategory::Legs),
            "arms" => Ok(ExerciseCategory::Arms),
            "core" => Ok(ExerciseCategory::Core),
            "other" => Ok(ExerciseCategory::Other),
            other => Err(GymError::InvalidInput(format!(
                "Unknown category: {} (use push, pull, legs, arms, core, or other)",
                other
            ))),
        }
    }
}

/// Determines which set shape an exercise records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    #[default]
    Strength,
    Bodyweight,
    Cardio,
}

impl ExerciseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::Strength => "strength",
            ExerciseType::Bodyweight => "bodyweight",
            ExerciseType::Cardio => "cardio",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "strength" => Ok(ExerciseType::Strength),
            "bodyweight" => Ok(ExerciseType::Bodyweight),
            "cardio" => Ok(ExerciseType::Cardio),
            other => Err(GymError::InvalidInput(format!(
                "Unknown exercise type: {} (use strength, bodyweight, or cardio)",
                other
            ))),
        }
    }
}

/// A single logged set. Exactly one shape applies per set, determined by the
/// owning library exercise's type. Set numbers are positional: the 1-based
/// index of the set within its exercise, so deletion renumbers implicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Set {
    Strength {
        weight: f64,
        reps: u32,
        /// Perceived exertion, 0-100.
        rpe: u8,
        rest_seconds: u32,
    },
    Bodyweight {
        reps: u32,
        rest_seconds: u32,
    },
    Cardio {
        duration_seconds: u32,
    },
}

impl Set {
    /// Rest period to feed the rest timer after this set, if any.
    pub fn rest_seconds(&self) -> Option<u32> {
        match self {
            Set::Strength { rest_seconds, .. } | Set::Bodyweight { rest_seconds, .. } => {
                Some(*rest_seconds)
            }
            Set::Cardio { .. } => None,
        }
    }

    /// The exercise type this set shape belongs to.
    pub fn exercise_type(&self) -> ExerciseType {
        match self {
            Set::Strength { .. } => ExerciseType::Strength,
            Set::Bodyweight { .. } => ExerciseType::Bodyweight,
            Set::Cardio { .. } => ExerciseType::Cardio,
        }
    }
}

/// An exercise performed within a workout. Has no identity outside its
/// parent; `exercise_name` is the join key to the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub exercise_name: String,
    #[serde(default)]
    pub notes: String,
    pub sets: Vec<Set>,
}

impl ExerciseEntry {
    pub fn new(exercise_name: impl Into<String>) -> Self {
        Self {
            exercise_name: exercise_name.into(),
            notes: String::new(),
            sets: Vec::new(),
        }
    }
}

/// A persisted workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Identifier assigned by the store.
    pub id: i64,

    /// Optional user-facing name (e.g., "Push Day").
    pub name: Option<String>,

    /// Calendar day the workout belongs to.
    pub date: NaiveDate,

    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,

    /// Total duration in minutes, computed on completion.
    pub duration_min: Option<u32>,

    #[serde(default)]
    pub notes: String,

    pub exercises: Vec<ExerciseEntry>,
}

/// Builder for workouts not yet persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkout {
    pub name: Option<String>,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration_min: Option<u32>,
    pub notes: String,
    pub exercises: Vec<ExerciseEntry>,
}

impl NewWorkout {
    pub fn new(date: NaiveDate, start_time: DateTime<Utc>) -> Self {
        Self {
            name: None,
            date,
            start_time,
            end_time: None,
            duration_min: None,
            notes: String::new(),
            exercises: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_exercises(mut self, exercises: Vec<ExerciseEntry>) -> Self {
        self.exercises = exercises;
        self
    }

    pub fn finished_at(mut self, end_time: DateTime<Utc>) -> Self {
        let minutes = (end_time - self.start_time).num_minutes().max(0) as u32;
        self.end_time = Some(end_time);
        self.duration_min = Some(minutes);
        self
    }
}

/// A link to a reference video for an exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoLink {
    pub title: String,
    pub url: String,
}

impl VideoLink {
    /// Validate and build a link. Only absolute http(s) URLs are accepted.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let title = title.into();
        let url = url.into();
        if title.trim().is_empty() {
            return Err(GymError::InvalidInput("Link title is empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(GymError::InvalidInput(format!(
                "Invalid URL (must start with http:// or https://): {}",
                url
            )));
        }
        Ok(Self { title, url })
    }
}

/// A library exercise. Names are unique across the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryExercise {
    pub id: i64,
    pub name: String,
    pub category: ExerciseCategory,
    pub exercise_type: ExerciseType,

    /// Monotonic count of workouts this exercise appeared in.
    pub use_count: u32,
    pub last_used: DateTime<Utc>,

    #[serde(default)]
    pub video_links: Vec<VideoLink>,
}

/// Builder for library exercises not yet persisted.
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub name: String,
    pub category: ExerciseCategory,
    pub exercise_type: ExerciseType,
}

impl NewExercise {
    pub fn new(name: impl Into<String>, category: ExerciseCategory) -> Self {
        Self {
            name: name.into(),
            category,
            exercise_type: ExerciseType::default(),
        }
    }

    pub fn with_type(mut self, exercise_type: ExerciseType) -> Self {
        self.exercise_type = exercise_type;
        self
    }
}

/// A reusable workout template: an ordered list of exercise names, no sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub exercise_names: Vec<String>,

    /// Bundled seed templates cannot be deleted.
    pub is_starter: bool,

    pub use_count: u32,
    pub last_used: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Builder for templates not yet persisted.
#[derive(Debug, Clone)]
pub struct NewTemplate {
    pub name: String,
    pub description: String,
    pub exercise_names: Vec<String>,
    pub is_starter: bool,
}

impl NewTemplate {
    pub fn new(name: impl Into<String>, exercise_names: Vec<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            exercise_names,
            is_starter: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Record counts across all collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub workout_count: u64,
    pub exercise_count: u64,
    pub template_count: u64,
}
