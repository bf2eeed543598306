//! Shared helpers for command handlers.

mod parsing;

pub use parsing::{parse_date, parse_set_spec};

use dialoguer::Confirm;

/// Ask for confirmation before a destructive action. `yes` skips the prompt.
pub fn confirm(prompt: &str, yes: bool) -> anyhow::Result<bool> {
    if yes {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}

/// Format whole seconds as M:SS.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
