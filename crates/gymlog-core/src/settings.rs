//! Application settings.
//!
//! A small JSON blob read once at startup and rewritten on every change.
//! A missing file yields the defaults; a corrupt file is an error rather
//! than silently resetting the user's preferences.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GymError, Result};

/// Unit used for displaying and entering weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Lbs,
    Kg,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Lbs => "lbs",
            WeightUnit::Kg => "kg",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "lbs" => Ok(WeightUnit::Lbs),
            "kg" => Ok(WeightUnit::Kg),
            other => Err(GymError::InvalidInput(format!(
                "Unknown weight unit: {} (use lbs or kg)",
                other
            ))),
        }
    }
}

/// Process-wide configuration, persisted separately from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub weight_unit: WeightUnit,
    /// Default perceived exertion, 0-100.
    pub default_rpe: u8,
    pub default_rest_seconds: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            weight_unit: WeightUnit::default(),
            default_rpe: 80,
            default_rest_seconds: 90,
        }
    }
}

impl AppSettings {
    /// Load settings, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(GymError::Storage(format!(
                    "Failed to read settings {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        let settings: AppSettings = serde_json::from_str(&contents).map_err(|e| {
            GymError::Storage(format!("Failed to parse settings {}: {}", path.display(), e))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                GymError::Storage(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|e| {
            GymError::Storage(format!("Failed to write settings {}: {}", path.display(), e))
        })?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_rpe > 100 {
            return Err(GymError::Validation(
                "Default RPE must be between 0 and 100".to_string(),
            ));
        }
        if self.default_rest_seconds == 0 {
            return Err(GymError::Validation(
                "Default rest time must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("settings.json");
        let settings = AppSettings::load(&path).expect("load should succeed");
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings {
            weight_unit: WeightUnit::Kg,
            default_rpe: 75,
            default_rest_seconds: 120,
        };
        settings.save(&path).expect("save should succeed");

        let loaded = AppSettings::load(&path).expect("load should succeed");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_invalid_rpe_rejected() {
        let settings = AppSettings {
            default_rpe: 101,
            ..AppSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(AppSettings::load(&path).is_err());
    }
}
