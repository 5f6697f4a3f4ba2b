//! quizline configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::loader::DEFAULT_MAX_QUESTIONS;

/// Top-level quizline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Question source, one `PROMPT|ANSWER` per line.
    #[serde(default = "default_questions")]
    pub questions: PathBuf,
    /// Maximum number of questions accepted from the source.
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,
    /// How often the front end drives the session timer, in milliseconds.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
}

fn default_questions() -> PathBuf {
    PathBuf::from("questions/quiz.txt")
}
fn default_max_questions() -> usize {
    DEFAULT_MAX_QUESTIONS
}
fn default_tick_interval() -> u64 {
    1000
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions: default_questions(),
            max_questions: default_max_questions(),
            tick_interval_ms: default_tick_interval(),
        }
    }
}

impl QuizConfig {
    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.max_questions >= 1, "max_questions must be at least 1");
        anyhow::ensure!(
            self.tick_interval_ms >= 1,
            "tick_interval_ms must be at least 1"
        );
        Ok(())
    }
}

/// Expand `${VAR_NAME}` references from the environment in one left-to-right
/// pass; expanded values are not scanned again. Unset variables expand to
/// nothing and an unterminated `${` is kept as is.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + 2 + len];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + 2 + len + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `quizline.toml` in the current directory
/// 2. `~/.config/quizline/config.toml`
///
/// `QUIZLINE_QUESTIONS` overrides the question source path.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizline.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    if let Ok(questions) = std::env::var("QUIZLINE_QUESTIONS") {
        config.questions = PathBuf::from(questions);
    }

    config.questions = PathBuf::from(resolve_env_vars(&config.questions.to_string_lossy()));
    config.validate()?;

    Ok(config)
}

/// Parse a TOML config document.
pub fn parse_config(content: &str) -> Result<QuizConfig> {
    Ok(toml::from_str::<QuizConfig>(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizline"))
}
