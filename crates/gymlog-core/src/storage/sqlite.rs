//! SQLite storage backend.
//!
//! A single on-disk database file holds all three collections. Opening the
//! store runs pending schema migrations and seeds starter content into any
//! empty collection. Opening fails fatally if the file cannot be opened or
//! the on-disk schema is newer than this build; callers are expected to
//! abort rather than run without a store.

use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};

use crate::error::{GymError, Result};
use crate::models::{
    LibraryExercise, NewExercise, NewTemplate, NewWorkout, StoreStats, Workout, WorkoutTemplate,
};
use crate::seed::{STARTER_EXERCISES, STARTER_TEMPLATES};
use crate::storage::migrations;
use crate::storage::row::{ExerciseRow, TemplateRow, WorkoutRow};
use crate::storage::WorkoutStore;

const WORKOUT_COLUMNS: &str =
    "id, name, date, start_time, end_time, duration_min, notes, exercises_json";
const EXERCISE_COLUMNS: &str =
    "id, name, category, exercise_type, use_count, last_used, video_links_json";
const TEMPLATE_COLUMNS: &str =
    "id, name, description, exercises_json, is_starter, use_count, last_used, created_at";

/// SQLite-backed workout store.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (creating if necessary) the database at `path`, run migrations,
    /// and seed starter content into empty collections.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                GymError::Storage(format!(
                    "Failed to create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let conn = Connection::open(path).map_err(|e| {
            GymError::Storage(format!("Failed to open database {}: {}", path.display(), e))
        })?;
        Self::initialize(conn)
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| GymError::Storage(format!("Failed to open in-memory database: {}", e)))?;
        Self::initialize(conn)
    }

    fn initialize(mut conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        migrations::migrate(&mut conn)?;
        seed_starter_content(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| GymError::Storage("SQLite connection poisoned".to_string()))
    }

    fn count_table(&self, table: &str) -> Result<u64> {
        let conn = self.lock_conn()?;
        let count: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })?;
        Ok(count.max(0) as u64)
    }
}

/// Populate empty collections from the built-in starter lists. A collection
/// with at least one record is left alone, so repeated opens never duplicate
/// seeded content.
fn seed_starter_content(conn: &Connection) -> Result<()> {
    let now = Utc::now().to_rfc3339();

    let exercise_count: i64 = conn.query_row("SELECT COUNT(*) FROM exercises", [], |row| {
        row.get(0)
    })?;
    if exercise_count == 0 {
        for starter in STARTER_EXERCISES {
            conn.execute(
                "INSERT INTO exercises (name, category, exercise_type, use_count, last_used)
                 VALUES (?1, ?2, ?3, 0, ?4)",
                (
                    starter.name,
                    starter.category.as_str(),
                    starter.exercise_type.as_str(),
                    &now,
                ),
            )?;
        }
        tracing::info!(count = STARTER_EXERCISES.len(), "seeded starter exercises");
    }

    let template_count: i64 =
        conn.query_row("SELECT COUNT(*) FROM templates", [], |row| row.get(0))?;
    if template_count == 0 {
        for starter in STARTER_TEMPLATES {
            let exercises_json = serde_json::to_string(starter.exercise_names)?;
            conn.execute(
                "INSERT INTO templates (name, description, exercises_json, is_starter, use_count, created_at)
                 VALUES (?1, ?2, ?3, 1, 0, ?4)",
                (starter.name, starter.description, exercises_json, &now),
            )?;
        }
        tracing::info!(count = STARTER_TEMPLATES.len(), "seeded starter templates");
    }

    Ok(())
}

fn workout_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<WorkoutRow> {
    Ok(WorkoutRow {
        id: row.get(0)?,
        name: row.get(1)?,
        date: row.get(2)?,
        start_time: row.get(3)?,
        end_time: row.get(4)?,
        duration_min: row.get(5)?,
        notes: row.get(6)?,
        exercises_json: row.get(7)?,
    })
}

fn exercise_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ExerciseRow> {
    Ok(ExerciseRow {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        exercise_type: row.get(3)?,
        use_count: row.get(4)?,
        last_used: row.get(5)?,
        video_links_json: row.get(6)?,
    })
}

fn template_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TemplateRow> {
    Ok(TemplateRow {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        exercises_json: row.get(3)?,
        is_starter: row.get(4)?,
        use_count: row.get(5)?,
        last_used: row.get(6)?,
        created_at: row.get(7)?,
    })
}

impl WorkoutStore for SqliteStore {
    fn insert_workout(&mut self, workout: &NewWorkout) -> Result<i64> {
        let conn = self.lock_conn()?;
        let exercises_json = serde_json::to_string(&workout.exercises)?;
        conn.execute(
            "INSERT INTO workouts (name, date, start_time, end_time, duration_min, notes, exercises_json)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            (
                &workout.name,
                workout.date.format("%Y-%m-%d").to_string(),
                workout.start_time.to_rfc3339(),
                workout.end_time.map(|t| t.to_rfc3339()),
                workout.duration_min,
                &workout.notes,
                exercises_json,
            ),
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn get_workout(&self, id: i64) -> Result<Option<Workout>> {
        let conn = self.lock_conn()?;
        let result = conn
            .query_row(
                &format!("SELECT {} FROM workouts WHERE id = ?", WORKOUT_COLUMNS),
                [id],
                workout_from_row,
            )
            .optional()?;
        result.map(Workout::try_from).transpose()
    }

    fn list_workouts(&self) -> Result<Vec<Workout>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM workouts", WORKOUT_COLUMNS))?;
        let rows = stmt.query_map([], workout_from_row)?;

        let mut workouts = Vec::new();
        for row in rows {
            workouts.push(row?.try_into()?);
        }
        Ok(workouts)
    }

    fn workouts_by_date(&self, date: chrono::NaiveDate) -> Result<Vec<Workout>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM workouts WHERE date = ?",
            WORKOUT_COLUMNS
        ))?;
        let rows = stmt.query_map([date.format("%Y-%m-%d").to_string()], workout_from_row)?;

        let mut workouts = Vec::new();
        for row in rows {
            workouts.push(row?.try_into()?);
        }
        Ok(workouts)
    }

    fn update_workout(&mut self, workout: &Workout) -> Result<()> {
        let conn = self.lock_conn()?;
        let exercises_json = serde_json::to_string(&workout.exercises)?;
        let updated = conn.execute(
            "UPDATE workouts
             SET name = ?1, date = ?2, start_time = ?3, end_time = ?4,
                 duration_min = ?5, notes = ?6, exercises_json = ?7
             WHERE id = ?8",
            (
                &workout.name,
                workout.date.format("%Y-%m-%d").to_string(),
                workout.start_time.to_rfc3339(),
                workout.end_time.map(|t| t.to_rfc3339()),
                workout.duration_min,
                &workout.notes,
                exercises_json,
                workout.id,
            ),
        )?;
        if updated == 0 {
            return Err(GymError::NotFound(format!(
                "Workout {} not found",
                workout.id
            )));
        }
        Ok(())
    }

    fn delete_workout(&mut self, id: i64) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute("DELETE FROM workouts WHERE id = ?", [id])?;
        Ok(())
    }

    fn workout_count(&self) -> Result<u64> {
        self.count_table("workouts")
    }

    fn insert_exercise(&mut self, exercise: &NewExercise) -> Result<i64> {
        let name = exercise.name.trim();
        if name.is_empty() {
            return Err(GymError::Validation("Exercise name is empty".to_string()));
        }

        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO exercises (name, category, exercise_type, use_count, last_used)
             VALUES (?1, ?2, ?3, 0, ?4)",
            (
                name,
                exercise.category.as_str(),
                exercise.exercise_type.as_str(),
                Utc::now().to_rfc3339(),
            ),
        )
        .map_err(|e| match GymError::from(e) {
            GymError::Constraint(_) => {
                GymError::Constraint(format!("Exercise '{}' already exists", name))
            }
            other => other,
        })?;
        Ok(conn.last_insert_rowid())
    }

    fn get_exercise(&self, id: i64) -> Result<Option<LibraryExercise>> {
        let conn = self.lock_conn()?;
        let result = conn
            .query_row(
                &format!("SELECT {} FROM exercises WHERE id = ?", EXERCISE_COLUMNS),
                [id],
                exercise_from_row,
            )
            .optional()?;
        result.map(LibraryExercise::try_from).transpose()
    }

    fn get_exercise_by_name(&self, name: &str) -> Result<Option<LibraryExercise>> {
        let conn = self.lock_conn()?;
        let result = conn
            .query_row(
                &format!("SELECT {} FROM exercises WHERE name = ?", EXERCISE_COLUMNS),
                [name],
                exercise_from_row,
            )
            .optional()?;
        result.map(LibraryExercise::try_from).transpose()
    }

    fn list_exercises(&self) -> Result<Vec<LibraryExercise>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM exercises", EXERCISE_COLUMNS))?;
        let rows = stmt.query_map([], exercise_from_row)?;

        let mut exercises = Vec::new();
        for row in rows {
            exercises.push(row?.try_into()?);
        }
        Ok(exercises)
    }

    fn search_exercises(&self, query: &str) -> Result<Vec<LibraryExercise>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM exercises WHERE instr(lower(name), lower(?1)) > 0",
            EXERCISE_COLUMNS
        ))?;
        let rows = stmt.query_map([query], exercise_from_row)?;

        let mut exercises = Vec::new();
        for row in rows {
            exercises.push(row?.try_into()?);
        }
        Ok(exercises)
    }

    fn update_exercise(&mut self, exercise: &LibraryExercise) -> Result<()> {
        let conn = self.lock_conn()?;
        let video_links_json = if exercise.video_links.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&exercise.video_links)?)
        };
        let updated = conn.execute(
            "UPDATE exercises
             SET name = ?1, category = ?2, exercise_type = ?3, use_count = ?4,
                 last_used = ?5, video_links_json = ?6
             WHERE id = ?7",
            (
                &exercise.name,
                exercise.category.as_str(),
                exercise.exercise_type.as_str(),
                exercise.use_count,
                exercise.last_used.to_rfc3339(),
                video_links_json,
                exercise.id,
            ),
        )?;
        if updated == 0 {
            return Err(GymError::NotFound(format!(
                "Exercise {} not found",
                exercise.id
            )));
        }
        Ok(())
    }

    fn delete_exercise(&mut self, id: i64) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute("DELETE FROM exercises WHERE id = ?", [id])?;
        Ok(())
    }

    fn exercise_count(&self) -> Result<u64> {
        self.count_table("exercises")
    }

    fn record_exercise_use(&mut self, name: &str) -> Result<()> {
        // Read-then-write with no cross-operation locking; a concurrent bump
        // can lose an increment.
        let conn = self.lock_conn()?;
        let id: Option<i64> = conn
            .query_row("SELECT id FROM exercises WHERE name = ?", [name], |row| {
                row.get(0)
            })
            .optional()?;
        let Some(id) = id else {
            return Ok(());
        };
        conn.execute(
            "UPDATE exercises SET use_count = use_count + 1, last_used = ?1 WHERE id = ?2",
            (Utc::now().to_rfc3339(), id),
        )?;
        Ok(())
    }

    fn insert_template(&mut self, template: &NewTemplate) -> Result<i64> {
        let name = template.name.trim();
        if name.is_empty() {
            return Err(GymError::Validation("Template name is empty".to_string()));
        }

        let conn = self.lock_conn()?;
        let exercises_json = serde_json::to_string(&template.exercise_names)?;
        conn.execute(
            "INSERT INTO templates (name, description, exercises_json, is_starter, use_count, created_at)
             VALUES (?1, ?2, ?3, ?4, 0, ?5)",
            (
                name,
                &template.description,
                exercises_json,
                template.is_starter,
                Utc::now().to_rfc3339(),
            ),
        )
        .map_err(|e| match GymError::from(e) {
            GymError::Constraint(_) => {
                GymError::Constraint(format!("Template '{}' already exists", name))
            }
            other => other,
        })?;
        Ok(conn.last_insert_rowid())
    }

    fn get_template(&self, id: i64) -> Result<Option<WorkoutTemplate>> {
        let conn = self.lock_conn()?;
        let result = conn
            .query_row(
                &format!("SELECT {} FROM templates WHERE id = ?", TEMPLATE_COLUMNS),
                [id],
                template_from_row,
            )
            .optional()?;
        result.map(WorkoutTemplate::try_from).transpose()
    }

    fn get_template_by_name(&self, name: &str) -> Result<Option<WorkoutTemplate>> {
        let conn = self.lock_conn()?;
        let result = conn
            .query_row(
                &format!("SELECT {} FROM templates WHERE name = ?", TEMPLATE_COLUMNS),
                [name],
                template_from_row,
            )
            .optional()?;
        result.map(WorkoutTemplate::try_from).transpose()
    }

    fn list_templates(&self) -> Result<Vec<WorkoutTemplate>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM templates", TEMPLATE_COLUMNS))?;
        let rows = stmt.query_map([], template_from_row)?;

        let mut templates = Vec::new();
        for row in rows {
            templates.push(row?.try_into()?);
        }
        Ok(templates)
    }

    fn update_template(&mut self, template: &WorkoutTemplate) -> Result<()> {
        let conn = self.lock_conn()?;
        let exercises_json = serde_json::to_string(&template.exercise_names)?;
        let updated = conn.execute(
            "UPDATE templates
             SET name = ?1, description = ?2, exercises_json = ?3,
                 use_count = ?4, last_used = ?5
             WHERE id = ?6",
            (
                &template.name,
                &template.description,
                exercises_json,
                template.use_count,
                template.last_used.map(|t| t.to_rfc3339()),
                template.id,
            ),
        )?;
        if updated == 0 {
            return Err(GymError::NotFound(format!(
                "Template {} not found",
                template.id
            )));
        }
        Ok(())
    }

    fn delete_template(&mut self, id: i64) -> Result<()> {
        let conn = self.lock_conn()?;
        let is_starter: Option<i64> = conn
            .query_row("SELECT is_starter FROM templates WHERE id = ?", [id], |row| {
                row.get(0)
            })
            .optional()?;
        match is_starter {
            None => Ok(()),
            Some(flag) if flag != 0 => Err(GymError::Validation(
                "Starter templates cannot be deleted".to_string(),
            )),
            Some(_) => {
                conn.execute("DELETE FROM templates WHERE id = ?", [id])?;
                Ok(())
            }
        }
    }

    fn template_count(&self) -> Result<u64> {
        self.count_table("templates")
    }

    fn record_template_use(&mut self, id: i64) -> Result<()> {
        let conn = self.lock_conn()?;
        let updated = conn.execute(
            "UPDATE templates SET use_count = use_count + 1, last_used = ?1 WHERE id = ?2",
            (Utc::now().to_rfc3339(), id),
        )?;
        if updated == 0 {
            return Err(GymError::NotFound(format!("Template {} not found", id)));
        }
        Ok(())
    }

    fn clear_all_data(&mut self) -> Result<()> {
        {
            let mut conn = self.lock_conn()?;
            let tx = conn.transaction()?;
            tx.execute("DELETE FROM workouts", [])?;
            tx.execute("DELETE FROM exercises", [])?;
            tx.execute("DELETE FROM templates", [])?;
            tx.commit()?;
        }
        let conn = self.lock_conn()?;
        seed_starter_content(&conn)
    }

    fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            workout_count: self.workout_count()?,
            exercise_count: self.exercise_count()?,
            template_count: self.template_count()?,
        })
    }
}
