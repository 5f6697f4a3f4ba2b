pub mod init;
pub mod play;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use quizline_core::config::{load_config_from, QuizConfig};

/// Load the config file and apply command-line overrides on top.
pub fn resolve_config(
    questions: Option<PathBuf>,
    max: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<QuizConfig> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(questions) = questions {
        config.questions = questions;
    }
    if let Some(max) = max {
        config.max_questions = max;
    }
    config.validate()?;
    Ok(config)
}
