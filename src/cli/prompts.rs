//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::Confirm;

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Prompt user to confirm dropping degenerate columns
pub fn confirm_drop_columns(column_count: usize) -> Result<bool> {
    let message = format!("Drop {} single-value column(s)?", column_count);
    confirm_step(&message)
}
