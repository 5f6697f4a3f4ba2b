//! Error types for the quiz core.
//!
//! None of these are fatal: the loader downgrades [`LoadError`] to an empty
//! bank, and the engine reports [`EmptyBankError`] while staying idle.

use std::path::PathBuf;

use thiserror::Error;

/// Returned by [`QuizEngine::start`](crate::engine::QuizEngine::start) when the
/// bank holds no questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No valid questions found. Please check your question file and try again.")]
pub struct EmptyBankError;

/// Failures reading a question source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read question source {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Path of the source that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Unreadable { path, .. } => path,
        }
    }
}

/// Why a single source line was rejected by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineRejection {
    /// The line did not split into exactly two segments on `|`.
    #[error("expected 2 '|'-separated fields, found {0}")]
    WrongSegmentCount(usize),
    /// The prompt segment was empty after trimming.
    #[error("empty prompt")]
    EmptyPrompt,
    /// The answer segment was empty after trimming.
    #[error("empty answer")]
    EmptyAnswer,
}
