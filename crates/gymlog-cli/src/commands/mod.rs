//! Command handlers, one module per command area.

pub mod exercises;
pub mod export;
pub mod history;
pub mod misc;
pub mod rest;
pub mod settings_cmd;
pub mod templates;
pub mod workout;
