//! Interactive matrix entry
//!
//! dialoguer prompts for a full snapshot: one engine selection, the two
//! counts, then one space-separated row per process. Invalid rows re-prompt
//! instead of failing the session.

use dialoguer::{Input, Select};
use thiserror::Error;

use crate::primitives::{Matrix, ResourceVector};

/// Errors raised by interactive prompting
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt failed: {source}")]
    Prompt {
        #[from]
        source: dialoguer::Error,
    },
}

/// Which engine an interactive session drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineChoice {
    Safety,
    CircularWait,
}

/// Top-level engine selection
pub fn prompt_engine() -> Result<EngineChoice, PromptError> {
    let choice = Select::new()
        .with_prompt("Choose a simulation method")
        .items(&[
            "Safety check (Banker's algorithm)",
            "Circular wait (cycle detection)",
        ])
        .default(0)
        .interact()?;

    Ok(match choice {
        0 => EngineChoice::Safety,
        _ => EngineChoice::CircularWait,
    })
}

/// Process and resource counts
pub fn prompt_counts() -> Result<(usize, usize), PromptError> {
    let processes: usize = Input::new()
        .with_prompt("Processes")
        .validate_with(|n: &usize| {
            if *n > 0 { Ok(()) } else { Err("count must be positive") }
        })
        .interact_text()?;

    let resources: usize = Input::new()
        .with_prompt("Resources")
        .validate_with(|n: &usize| {
            if *n > 0 { Ok(()) } else { Err("count must be positive") }
        })
        .interact_text()?;

    Ok((processes, resources))
}

/// Collect a `processes x resources` matrix, one row prompt per process
pub fn prompt_matrix(
    label: &str,
    processes: usize,
    resources: usize,
) -> Result<Matrix, PromptError> {
    let mut matrix = Vec::with_capacity(processes);
    for i in 0..processes {
        let row: String = Input::new()
            .with_prompt(format!("{label} P{i} ({resources} values)"))
            .validate_with(|text: &String| parse_row(text, resources).map(|_| ()))
            .interact_text()?;
        // validate_with already accepted the text
        matrix.push(parse_row(&row, resources).expect("validated row parses"));
    }
    Ok(matrix)
}

/// Collect a resource-indexed vector from a single row prompt
pub fn prompt_vector(label: &str, resources: usize) -> Result<ResourceVector, PromptError> {
    let row: String = Input::new()
        .with_prompt(format!("{label} ({resources} values)"))
        .validate_with(|text: &String| parse_row(text, resources).map(|_| ()))
        .interact_text()?;
    Ok(parse_row(&row, resources).expect("validated row parses"))
}

/// Parse a space-separated integer row of a fixed width
fn parse_row(text: &str, expected: usize) -> Result<Vec<i64>, String> {
    let values: Result<Vec<i64>, _> = text
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| format!("'{token}' is not an integer"))
        })
        .collect();
    let values = values?;
    if values.len() != expected {
        return Err(format!("expected {expected} values, found {}", values.len()));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    include!("interactive.test.rs");
}
