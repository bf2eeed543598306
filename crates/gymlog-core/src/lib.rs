//! # GymLog Core
//!
//! Core library for GymLog - a local-first workout logger.
//!
//! This crate provides the domain model, persistent store, rest timer, and
//! export logic independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: `WorkoutStore` trait and the SQLite backend, including
//!   versioned schema migrations and starter-content seeding
//! - **models**: workouts, sets, the exercise library, and templates
//! - **timer**: the rest timer between sets (count-up with a one-shot
//!   threshold alert)
//! - **csv**: workout history export
//! - **settings**: the persisted settings blob

pub mod csv;
pub mod error;
pub mod models;
pub mod seed;
pub mod settings;
pub mod storage;
pub mod timer;

pub use error::{GymError, Result};
pub use storage::{SqliteStore, WorkoutStore};
pub use timer::RestTimer;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
