use chrono::{NaiveDate, TimeZone, Utc};
use tempfile::TempDir;

use gymlog_core::models::{
    ExerciseCategory, ExerciseEntry, ExerciseType, NewExercise, NewTemplate, NewWorkout, Set,
    VideoLink,
};
use gymlog_core::seed::{STARTER_EXERCISES, STARTER_TEMPLATES};
use gymlog_core::{GymError, SqliteStore, WorkoutStore};

fn temp_db() -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("gymlog.sqlite");
    (dir, path)
}

fn sample_workout() -> NewWorkout {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 17, 0, 0).unwrap();
    NewWorkout::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), start)
        .with_name("Push Day")
        .with_notes("good session")
        .with_exercises(vec![ExerciseEntry {
            exercise_name: "Bench Press".to_string(),
            notes: String::new(),
            sets: vec![
                Set::Strength {
                    weight: 135.0,
                    reps: 5,
                    rpe: 80,
                    rest_seconds: 90,
                },
                Set::Bodyweight {
                    reps: 10,
                    rest_seconds: 60,
                },
            ],
        }])
        .finished_at(start + chrono::Duration::minutes(50))
}

#[test]
fn test_fresh_open_seeds_starter_content() {
    let store = SqliteStore::open_in_memory().expect("open should succeed");
    assert_eq!(
        store.exercise_count().unwrap(),
        STARTER_EXERCISES.len() as u64
    );
    assert_eq!(
        store.template_count().unwrap(),
        STARTER_TEMPLATES.len() as u64
    );
    assert_eq!(store.workout_count().unwrap(), 0);

    let bench = store
        .get_exercise_by_name("Bench Press")
        .unwrap()
        .expect("starter exercise should exist");
    assert_eq!(bench.category, ExerciseCategory::Push);
    assert_eq!(bench.use_count, 0);

    let starter_templates = store.list_templates().unwrap();
    assert!(starter_templates.iter().all(|t| t.is_starter));
}

#[test]
fn test_reopen_does_not_duplicate_seeds() {
    let (_dir, path) = temp_db();
    let first = SqliteStore::open(&path).expect("first open");
    let count = first.exercise_count().unwrap();
    drop(first);

    let second = SqliteStore::open(&path).expect("second open");
    assert_eq!(second.exercise_count().unwrap(), count);
    assert_eq!(
        second.template_count().unwrap(),
        STARTER_TEMPLATES.len() as u64
    );
}

#[test]
fn test_add_then_get_returns_equal_workout() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let new_workout = sample_workout();
    let id = store.insert_workout(&new_workout).expect("insert");

    let stored = store.get_workout(id).unwrap().expect("should exist");
    assert_eq!(stored.id, id);
    assert_eq!(stored.name, new_workout.name);
    assert_eq!(stored.date, new_workout.date);
    assert_eq!(stored.start_time, new_workout.start_time);
    assert_eq!(stored.duration_min, Some(50));
    assert_eq!(stored.notes, new_workout.notes);
    assert_eq!(stored.exercises, new_workout.exercises);
}

#[test]
fn test_get_missing_workout_is_none() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(store.get_workout(9999).unwrap().is_none());
}

#[test]
fn test_workouts_by_date_uses_the_index_key() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.insert_workout(&sample_workout()).unwrap();

    let start = Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap();
    store
        .insert_workout(&NewWorkout::new(
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            start,
        ))
        .unwrap();

    let march_first = store
        .workouts_by_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        .unwrap();
    assert_eq!(march_first.len(), 1);
    assert_eq!(march_first[0].name.as_deref(), Some("Push Day"));
}

#[test]
fn test_update_workout_replaces_record_and_fails_on_missing() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let id = store.insert_workout(&sample_workout()).unwrap();

    let mut workout = store.get_workout(id).unwrap().unwrap();
    workout.notes = "edited".to_string();
    workout.exercises.clear();
    store.update_workout(&workout).expect("update");

    let stored = store.get_workout(id).unwrap().unwrap();
    assert_eq!(stored.notes, "edited");
    assert!(stored.exercises.is_empty());

    workout.id = 9999;
    assert!(matches!(
        store.update_workout(&workout),
        Err(GymError::NotFound(_))
    ));
}

#[test]
fn test_delete_workout_is_idempotent() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let id = store.insert_workout(&sample_workout()).unwrap();
    store.delete_workout(id).expect("first delete");
    store.delete_workout(id).expect("second delete is a no-op");
    assert_eq!(store.workout_count().unwrap(), 0);
}

#[test]
fn test_duplicate_exercise_name_is_a_constraint_error() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let before = store.exercise_count().unwrap();

    let duplicate = NewExercise::new("Bench Press", ExerciseCategory::Push);
    assert!(matches!(
        store.insert_exercise(&duplicate),
        Err(GymError::Constraint(_))
    ));
    // Case-insensitive uniqueness.
    let shouty = NewExercise::new("BENCH PRESS", ExerciseCategory::Push);
    assert!(matches!(
        store.insert_exercise(&shouty),
        Err(GymError::Constraint(_))
    ));
    assert_eq!(store.exercise_count().unwrap(), before);
}

#[test]
fn test_custom_exercise_round_trip_with_links() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let id = store
        .insert_exercise(
            &NewExercise::new("Sled Push", ExerciseCategory::Legs)
                .with_type(ExerciseType::Cardio),
        )
        .expect("insert");

    let mut exercise = store.get_exercise(id).unwrap().expect("should exist");
    assert_eq!(exercise.name, "Sled Push");
    assert_eq!(exercise.exercise_type, ExerciseType::Cardio);
    assert!(exercise.video_links.is_empty());

    exercise
        .video_links
        .push(VideoLink::new("Technique", "https://example.com/sled").unwrap());
    store.update_exercise(&exercise).expect("update");

    let stored = store.get_exercise(id).unwrap().unwrap();
    assert_eq!(stored.video_links.len(), 1);
    assert_eq!(stored.video_links[0].url, "https://example.com/sled");
}

#[test]
fn test_search_exercises_is_case_insensitive_substring() {
    let store = SqliteStore::open_in_memory().unwrap();
    let hits = store.search_exercises("press").unwrap();
    assert!(hits.iter().any(|e| e.name == "Bench Press"));
    assert!(hits.iter().any(|e| e.name == "Overhead Press"));
    assert!(hits.iter().all(|e| e.name.to_lowercase().contains("press")));
}

#[test]
fn test_record_exercise_use_bumps_counters() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let before = store.get_exercise_by_name("Squat").unwrap().unwrap();

    store.record_exercise_use("Squat").expect("bump");
    store.record_exercise_use("Squat").expect("bump again");
    // Unknown names are ignored.
    store.record_exercise_use("Not In Library").expect("no-op");

    let after = store.get_exercise_by_name("Squat").unwrap().unwrap();
    assert_eq!(after.use_count, before.use_count + 2);
    assert!(after.last_used >= before.last_used);
}

#[test]
fn test_template_round_trip_and_duplicate_name() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let template = NewTemplate::new(
        "Upper A",
        vec!["Bench Press".to_string(), "Barbell Row".to_string()],
    )
    .with_description("Upper body, day A");
    let id = store.insert_template(&template).expect("insert");

    let stored = store.get_template(id).unwrap().expect("should exist");
    assert_eq!(stored.name, "Upper A");
    assert_eq!(stored.exercise_names, template.exercise_names);
    assert!(!stored.is_starter);
    assert_eq!(stored.use_count, 0);

    assert!(matches!(
        store.insert_template(&NewTemplate::new("Upper A", vec![])),
        Err(GymError::Constraint(_))
    ));
}

#[test]
fn test_starter_templates_cannot_be_deleted() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let starter = store
        .get_template_by_name("Push Day")
        .unwrap()
        .expect("starter template");
    assert!(matches!(
        store.delete_template(starter.id),
        Err(GymError::Validation(_))
    ));
    // An absent id is a no-op, same as workouts and exercises.
    store
        .delete_template(999_999)
        .expect("delete of missing id is a no-op");

    // Custom templates delete normally, and deleting twice is fine.
    let id = store
        .insert_template(&NewTemplate::new("Scratch", vec![]))
        .unwrap();
    store.delete_template(id).expect("delete custom template");
    store.delete_template(id).expect("repeat delete is a no-op");
}

#[test]
fn test_record_template_use() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let starter = store.get_template_by_name("Leg Day").unwrap().unwrap();
    store.record_template_use(starter.id).expect("bump");

    let after = store.get_template(starter.id).unwrap().unwrap();
    assert_eq!(after.use_count, starter.use_count + 1);
    assert!(after.last_used.is_some());

    assert!(matches!(
        store.record_template_use(999_999),
        Err(GymError::NotFound(_))
    ));
}

#[test]
fn test_clear_all_data_reseeds_like_a_fresh_install() {
    let (_dir, path) = temp_db();
    let mut store = SqliteStore::open(&path).expect("open");

    store.insert_workout(&sample_workout()).unwrap();
    store
        .insert_exercise(&NewExercise::new("Sled Push", ExerciseCategory::Legs))
        .unwrap();
    store
        .insert_template(&NewTemplate::new("Scratch", vec![]))
        .unwrap();

    store.clear_all_data().expect("clear");
    drop(store);

    let reopened = SqliteStore::open(&path).expect("reopen");
    let stats = reopened.stats().unwrap();
    assert_eq!(stats.workout_count, 0);
    assert_eq!(stats.exercise_count, STARTER_EXERCISES.len() as u64);
    assert_eq!(stats.template_count, STARTER_TEMPLATES.len() as u64);
}
