//! Application context for the GymLog CLI.
//!
//! Bundles CLI arguments with resolved filesystem paths so handlers do not
//! thread path parameters individually. All state lives under one data
//! directory: the SQLite database, the settings blob, and the workout draft.

use std::path::{Path, PathBuf};

use gymlog_core::settings::AppSettings;
use gymlog_core::SqliteStore;

use crate::cli::Cli;

const DB_FILE: &str = "gymlog.db";
const SETTINGS_FILE: &str = "settings.json";
const DRAFT_FILE: &str = "draft.json";

/// Application context that bundles CLI args with resolved paths.
pub struct AppContext<'a> {
    cli: &'a Cli,
    data_dir: PathBuf,
}

impl<'a> AppContext<'a> {
    /// Create a context from CLI arguments, resolving the data directory.
    pub fn new(cli: &'a Cli) -> Self {
        let data_dir = match cli.data_dir {
            Some(ref dir) => PathBuf::from(dir),
            None => default_data_dir(),
        };
        Self { cli, data_dir }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Path to the SQLite database (`--db` overrides the data dir).
    pub fn db_path(&self) -> PathBuf {
        match self.cli.db {
            Some(ref path) => PathBuf::from(path),
            None => self.data_dir.join(DB_FILE),
        }
    }

    /// Path to the settings blob.
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    /// Path to the workout draft scratch file.
    pub fn draft_path(&self) -> PathBuf {
        self.data_dir.join(DRAFT_FILE)
    }

    /// Open the store, creating and seeding the database on first use.
    pub fn open_store(&self) -> anyhow::Result<SqliteStore> {
        Ok(SqliteStore::open(&self.db_path())?)
    }

    /// Load settings, falling back to defaults when the file is missing.
    pub fn load_settings(&self) -> anyhow::Result<AppSettings> {
        Ok(AppSettings::load(&self.settings_path())?)
    }

    /// Persist settings.
    pub fn save_settings(&self, settings: &AppSettings) -> anyhow::Result<()> {
        Ok(settings.save(&self.settings_path())?)
    }
}

/// Default data directory: `$XDG_DATA_HOME/gymlog`, falling back to
/// `~/.local/share/gymlog`.
fn default_data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.trim().is_empty() {
            return Path::new(&xdg).join("gymlog");
        }
    }
    if let Ok(home) = std::env::var("HOME") {
        if !home.trim().is_empty() {
            return Path::new(&home).join(".local").join("share").join("gymlog");
        }
    }
    // Last resort for environments without HOME.
    PathBuf::from(".gymlog")
}
