//! Question bank loader.
//!
//! Parses `PROMPT|ANSWER` lines into a validated [`QuestionBank`]. Bad lines
//! are skipped and logged; an unreadable source yields an empty bank.

use std::path::Path;

use crate::error::{LineRejection, LoadError};
use crate::model::{QuestionBank, QuestionRecord};

/// Default cap on accepted questions per bank.
pub const DEFAULT_MAX_QUESTIONS: usize = 10;

/// Separator between prompt and answer.
pub const DELIMITER: char = '|';

/// A source line the loader rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source.
    pub line_number: usize,
    /// The raw line as read.
    pub content: String,
    pub reason: LineRejection,
}

/// The loaded bank plus everything the loader left out.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub bank: QuestionBank,
    pub skipped: Vec<SkippedLine>,
    /// `true` when the cap was reached before the end of the source.
    pub truncated: bool,
}

/// Parse one source line.
///
/// Returns `Ok(None)` for blank lines, which are not an error.
pub fn parse_line(line: &str) -> Result<Option<QuestionRecord>, LineRejection> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let mut parts: Vec<&str> = line.split(DELIMITER).collect();
    // Empty trailing fields do not count, so `Q|A|` is still two fields.
    while parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    let [prompt, answer] = parts.as_slice() else {
        return Err(LineRejection::WrongSegmentCount(parts.len()));
    };

    let prompt = prompt.trim();
    let answer = answer.trim();
    if prompt.is_empty() {
        return Err(LineRejection::EmptyPrompt);
    }
    if answer.is_empty() {
        return Err(LineRejection::EmptyAnswer);
    }

    Ok(Some(QuestionRecord::new(prompt, answer)))
}

/// Build a bank from raw lines, keeping at most `max_count` records.
pub fn load<I, S>(raw_lines: I, max_count: usize) -> QuestionBank
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    load_with_report(raw_lines, max_count).bank
}

/// Like [`load`], but also returns the rejected lines.
pub fn load_with_report<I, S>(raw_lines: I, max_count: usize) -> LoadReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    let mut skipped = Vec::new();
    let mut truncated = false;

    for (index, raw) in raw_lines.into_iter().enumerate() {
        let line = raw.as_ref();
        if records.len() >= max_count {
            if line.trim().is_empty() {
                continue;
            }
            truncated = true;
            break;
        }

        match parse_line(line) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(reason) => {
                tracing::warn!("skipping malformed line {}: {line} ({reason})", index + 1);
                skipped.push(SkippedLine {
                    line_number: index + 1,
                    content: line.to_string(),
                    reason,
                });
            }
        }
    }

    tracing::info!(
        "loaded {} valid questions (max {max_count})",
        records.len()
    );

    LoadReport {
        bank: QuestionBank::from_records(records),
        skipped,
        truncated,
    }
}

/// Read a question source into memory.
pub fn read_source(path: &Path) -> Result<String, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match content.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => content,
    })
}

/// Load a bank from a file, reporting rejected lines.
pub fn load_file_with_report(path: &Path, max_count: usize) -> Result<LoadReport, LoadError> {
    let content = read_source(path)?;
    Ok(load_with_report(content.lines(), max_count))
}

/// Load a bank from a file.
///
/// An unreadable file is logged and produces an empty bank; callers find out
/// through [`EmptyBankError`](crate::error::EmptyBankError) when starting.
pub fn load_file(path: &Path, max_count: usize) -> QuestionBank {
    match load_file_with_report(path, max_count) {
        Ok(report) => report.bank,
        Err(e) => {
            tracing::warn!("error loading questions: {e}");
            QuestionBank::default()
        }
    }
}
