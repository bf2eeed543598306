//! The in-progress workout draft.
//!
//! A workout is logged incrementally: `workout start` creates the draft,
//! `workout add` appends sets, `workout finish` persists it as a single
//! record. The draft survives between invocations as a JSON scratch file in
//! the data dir; nothing reaches the store until `finish`.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use gymlog_core::models::{ExerciseEntry, NewWorkout, Set};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftWorkout {
    pub name: Option<String>,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
    pub exercises: Vec<ExerciseEntry>,
}

impl DraftWorkout {
    pub fn new(name: Option<String>, date: NaiveDate) -> Self {
        Self {
            name,
            date,
            start_time: Utc::now(),
            notes: String::new(),
            exercises: Vec::new(),
        }
    }

    /// Load the draft, `Ok(None)` when no draft exists.
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to read draft {}: {}",
                    path.display(),
                    e
                ))
            }
        };
        let draft = serde_json::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Corrupt draft {}: {}", path.display(), e))?;
        Ok(Some(draft))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Remove the draft file. A no-op when no draft exists.
    pub fn discard(path: &Path) -> anyhow::Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(anyhow::anyhow!(
                "Failed to remove draft {}: {}",
                path.display(),
                e
            )),
        }
    }

    /// Append a set, merging into an existing entry for the same exercise.
    pub fn add_set(&mut self, exercise_name: &str, set: Set, note: Option<&str>) {
        let entry = match self
            .exercises
            .iter_mut()
            .find(|e| e.exercise_name.eq_ignore_ascii_case(exercise_name))
        {
            Some(entry) => entry,
            None => {
                self.exercises.push(ExerciseEntry::new(exercise_name));
                self.exercises.last_mut().unwrap()
            }
        };
        entry.sets.push(set);
        if let Some(note) = note {
            entry.notes = note.to_string();
        }
    }

    /// Total number of sets across all exercises.
    pub fn set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    /// Convert into a record ready for insertion, stamping the end time.
    pub fn into_new_workout(self, end_time: DateTime<Utc>) -> NewWorkout {
        let mut workout = NewWorkout::new(self.date, self.start_time)
            .with_notes(self.notes)
            .with_exercises(self.exercises)
            .finished_at(end_time);
        workout.name = self.name;
        workout
    }
}
