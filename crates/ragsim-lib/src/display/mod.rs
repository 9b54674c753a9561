//! Terminal display system
//!
//! Semantic APIs for user-facing communication, kept strictly apart from
//! logging (tracing) and from the engines: everything rendered here is
//! derived from the structured results the engines return.

use crate::primitives::ColorMode;

pub mod interactive;
pub mod status;

pub use interactive::{EngineChoice, PromptError};
pub use status::StatusDisplay;

/// Apply the configured color mode to all styled output
pub fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Auto => {}
        ColorMode::Always => console::set_colors_enabled(true),
        ColorMode::Never => console::set_colors_enabled(false),
    }
}
