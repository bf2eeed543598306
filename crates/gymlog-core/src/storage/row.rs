//! Raw row types for database queries, before parsing into domain types.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{GymError, Result};
use crate::models::{
    ExerciseCategory, ExerciseEntry, ExerciseType, LibraryExercise, VideoLink, Workout,
    WorkoutTemplate,
};

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| GymError::Storage(format!("Invalid timestamp: {}", e)))
}

#[derive(Debug)]
pub struct WorkoutRow {
    pub id: i64,
    pub name: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub duration_min: Option<i64>,
    pub notes: String,
    pub exercises_json: String,
}

impl TryFrom<WorkoutRow> for Workout {
    type Error = GymError;

    fn try_from(row: WorkoutRow) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
            .map_err(|e| GymError::Storage(format!("Invalid workout date: {}", e)))?;
        let start_time = parse_timestamp(&row.start_time)?;
        let end_time = row
            .end_time
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;
        let exercises: Vec<ExerciseEntry> = serde_json::from_str(&row.exercises_json)
            .map_err(|e| GymError::Storage(format!("Invalid exercises JSON: {}", e)))?;

        Ok(Workout {
            id: row.id,
            name: row.name,
            date,
            start_time,
            end_time,
            duration_min: row.duration_min.map(|m| m.max(0) as u32),
            notes: row.notes,
            exercises,
        })
    }
}

#[derive(Debug)]
pub struct ExerciseRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub exercise_type: String,
    pub use_count: i64,
    pub last_used: String,
    pub video_links_json: Option<String>,
}

impl TryFrom<ExerciseRow> for LibraryExercise {
    type Error = GymError;

    fn try_from(row: ExerciseRow) -> Result<Self> {
        let category = ExerciseCategory::parse(&row.category)
            .map_err(|e| GymError::Storage(format!("Invalid category column: {}", e)))?;
        let exercise_type = ExerciseType::parse(&row.exercise_type)
            .map_err(|e| GymError::Storage(format!("Invalid exercise_type column: {}", e)))?;
        let last_used = parse_timestamp(&row.last_used)?;
        let video_links: Vec<VideoLink> = match row.video_links_json {
            Some(ref value) => serde_json::from_str(value)
                .map_err(|e| GymError::Storage(format!("Invalid video links JSON: {}", e)))?,
            None => Vec::new(),
        };

        Ok(LibraryExercise {
            id: row.id,
            name: row.name,
            category,
            exercise_type,
            use_count: row.use_count.max(0) as u32,
            last_used,
            video_links,
        })
    }
}

#[derive(Debug)]
pub struct TemplateRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub exercises_json: String,
    pub is_starter: i64,
    pub use_count: i64,
    pub last_used: Option<String>,
    pub created_at: String,
}

impl TryFrom<TemplateRow> for WorkoutTemplate {
    type Error = GymError;

    fn try_from(row: TemplateRow) -> Result<Self> {
        let exercise_names: Vec<String> = serde_json::from_str(&row.exercises_json)
            .map_err(|e| GymError::Storage(format!("Invalid template exercises JSON: {}", e)))?;
        let last_used = row
            .last_used
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;
        let created_at = parse_timestamp(&row.created_at)?;

        Ok(WorkoutTemplate {
            id: row.id,
            name: row.name,
            description: row.description,
            exercise_names,
            is_starter: row.is_starter != 0,
            use_count: row.use_count.max(0) as u32,
            last_used,
            created_at,
        })
    }
}
