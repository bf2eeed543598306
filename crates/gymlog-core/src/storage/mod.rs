//! Durable storage for workouts, the exercise library, and templates.
//!
//! The `WorkoutStore` trait defines the interface the rest of the system
//! programs against. `SqliteStore` is the only backend today; the trait
//! keeps the seam open without changing any callers.

mod migrations;
mod row;
mod sqlite;

pub use migrations::SCHEMA_VERSION;
pub use sqlite::SqliteStore;

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{
    LibraryExercise, NewExercise, NewTemplate, NewWorkout, StoreStats, Workout, WorkoutTemplate,
};

/// Storage interface for the three durable collections.
///
/// Contract notes:
/// - `insert_*` assigns and returns the new identifier.
/// - `get_*` returns `Ok(None)` for a missing id, never an error.
/// - `list_*` imposes no ordering; callers sort by recency, usage, or name.
/// - `update_*` is a full replace by id and fails with `NotFound` if absent.
/// - `delete_*` is idempotent: a missing id is a no-op. Starter templates
///   are the one refusal, with `Validation`.
/// - Cross-operation atomicity is not provided; usage-count bumps are
///   read-then-write and may lose updates under concurrent use.
pub trait WorkoutStore: Send + Sync {
    // --- Workout operations ---

    fn insert_workout(&mut self, workout: &NewWorkout) -> Result<i64>;
    fn get_workout(&self, id: i64) -> Result<Option<Workout>>;
    fn list_workouts(&self) -> Result<Vec<Workout>>;
    /// Indexed lookup of all workouts on a calendar day.
    fn workouts_by_date(&self, date: NaiveDate) -> Result<Vec<Workout>>;
    fn update_workout(&mut self, workout: &Workout) -> Result<()>;
    fn delete_workout(&mut self, id: i64) -> Result<()>;
    fn workout_count(&self) -> Result<u64>;

    // --- Exercise library operations ---

    /// Fails with `GymError::Constraint` if the name already exists.
    fn insert_exercise(&mut self, exercise: &NewExercise) -> Result<i64>;
    fn get_exercise(&self, id: i64) -> Result<Option<LibraryExercise>>;
    /// Indexed lookup by unique name (case-insensitive).
    fn get_exercise_by_name(&self, name: &str) -> Result<Option<LibraryExercise>>;
    fn list_exercises(&self) -> Result<Vec<LibraryExercise>>;
    /// Case-insensitive substring search over names.
    fn search_exercises(&self, query: &str) -> Result<Vec<LibraryExercise>>;
    fn update_exercise(&mut self, exercise: &LibraryExercise) -> Result<()>;
    fn delete_exercise(&mut self, id: i64) -> Result<()>;
    fn exercise_count(&self) -> Result<u64>;
    /// Bump use_count and last_used for an exercise by name. Unknown names
    /// are ignored (the workout still references them verbatim).
    fn record_exercise_use(&mut self, name: &str) -> Result<()>;

    // --- Template operations ---

    /// Fails with `GymError::Constraint` if the name already exists.
    fn insert_template(&mut self, template: &NewTemplate) -> Result<i64>;
    fn get_template(&self, id: i64) -> Result<Option<WorkoutTemplate>>;
    fn get_template_by_name(&self, name: &str) -> Result<Option<WorkoutTemplate>>;
    fn list_templates(&self) -> Result<Vec<WorkoutTemplate>>;
    fn update_template(&mut self, template: &WorkoutTemplate) -> Result<()>;
    /// Fails with `Validation` for starter templates; a missing id is a no-op.
    fn delete_template(&mut self, id: i64) -> Result<()>;
    fn template_count(&self) -> Result<u64>;
    fn record_template_use(&mut self, id: i64) -> Result<()>;

    // --- Maintenance operations ---

    /// Empty every collection, then reseed starter content.
    fn clear_all_data(&mut self) -> Result<()>;
    fn stats(&self) -> Result<StoreStats>;
}
