//! Versioned schema migrations.
//!
//! The schema version lives in SQLite's `user_version` pragma. On open,
//! every migration newer than the recorded version is applied in order,
//! each inside its own transaction, and the pragma is advanced as part of
//! that transaction. Steps are idempotent (`IF NOT EXISTS` table creation,
//! column-existence guards before `ALTER TABLE`), never delete or rename
//! existing data, and treat a fresh empty database as a version-0 upgrade
//! where every guard falls through to plain creation.

use rusqlite::Connection;

use crate::error::{GymError, Result};
use crate::models::ExerciseType;
use crate::seed::STARTER_EXERCISES;

/// Schema version the code expects after all migrations have run.
pub const SCHEMA_VERSION: i64 = 3;

pub(crate) struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub apply: fn(&Connection) -> Result<()>,
}

pub(crate) const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "initial_stores",
        apply: initial_stores,
    },
    Migration {
        version: 2,
        name: "exercise_categories",
        apply: exercise_categories,
    },
    Migration {
        version: 3,
        name: "templates_and_video_links",
        apply: templates_and_video_links,
    },
];

pub(crate) fn recorded_version(conn: &Connection) -> Result<i64> {
    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(version)
}

/// Apply every pending migration, cumulatively, in version order.
pub(crate) fn migrate(conn: &mut Connection) -> Result<()> {
    let recorded = recorded_version(conn)?;
    if recorded > SCHEMA_VERSION {
        return Err(GymError::Storage(format!(
            "Database schema version {} is newer than this build supports ({})",
            recorded, SCHEMA_VERSION
        )));
    }

    for migration in MIGRATIONS.iter().filter(|m| m.version > recorded) {
        let tx = conn.transaction()?;
        (migration.apply)(&tx)?;
        tx.pragma_update(None, "user_version", migration.version)?;
        tx.commit()?;
        tracing::debug!(
            name = migration.name,
            version = migration.version,
            "applied schema migration"
        );
    }

    Ok(())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        &format!(
            "SELECT COUNT(*) FROM pragma_table_info('{}') WHERE name = ?",
            table
        ),
        [column],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// v1: workout and exercise collections with their indexes.
fn initial_stores(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS workouts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            date TEXT NOT NULL,
            start_time TEXT NOT NULL,
            end_time TEXT,
            duration_min INTEGER,
            notes TEXT NOT NULL DEFAULT '',
            exercises_json TEXT NOT NULL DEFAULT '[]'
        );

        CREATE INDEX IF NOT EXISTS workouts_date ON workouts (date);
        CREATE INDEX IF NOT EXISTS workouts_start_time ON workouts (start_time);

        CREATE TABLE IF NOT EXISTS exercises (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL COLLATE NOCASE UNIQUE,
            use_count INTEGER NOT NULL DEFAULT 0,
            last_used TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS exercises_last_used ON exercises (last_used);
        "#,
    )?;
    Ok(())
}

/// v2: category and type columns on exercises, backfilled on pre-existing
/// rows by matching against the starter seed table (fallback: Other /
/// strength). The NULL guard makes re-running the step a no-op and keeps
/// the backfill one-shot per record.
fn exercise_categories(conn: &Connection) -> Result<()> {
    if !column_exists(conn, "exercises", "category")? {
        conn.execute("ALTER TABLE exercises ADD COLUMN category TEXT", [])?;
    }
    if !column_exists(conn, "exercises", "exercise_type")? {
        conn.execute("ALTER TABLE exercises ADD COLUMN exercise_type TEXT", [])?;
    }

    for starter in STARTER_EXERCISES {
        conn.execute(
            "UPDATE exercises SET category = ?1, exercise_type = ?2
             WHERE category IS NULL AND name = ?3 COLLATE NOCASE",
            (
                starter.category.as_str(),
                starter.exercise_type.as_str(),
                starter.name,
            ),
        )?;
    }

    conn.execute(
        "UPDATE exercises SET category = 'Other' WHERE category IS NULL",
        [],
    )?;
    conn.execute(
        "UPDATE exercises SET exercise_type = ?1 WHERE exercise_type IS NULL",
        [ExerciseType::default().as_str()],
    )?;

    Ok(())
}

/// v3: template collection plus video links on exercises.
fn templates_and_video_links(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS templates (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL COLLATE NOCASE UNIQUE,
            description TEXT NOT NULL DEFAULT '',
            exercises_json TEXT NOT NULL DEFAULT '[]',
            is_starter INTEGER NOT NULL DEFAULT 0,
            use_count INTEGER NOT NULL DEFAULT 0,
            last_used TEXT,
            created_at TEXT NOT NULL
        );
        "#,
    )?;

    if !column_exists(conn, "exercises", "video_links_json")? {
        conn.execute("ALTER TABLE exercises ADD COLUMN video_links_json TEXT", [])?;
    }

    Ok(())
}
