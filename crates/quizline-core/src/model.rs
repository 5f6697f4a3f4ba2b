//! Core data model types for quizline.
//!
//! Question records and banks are only built by the [`loader`](crate::loader),
//! so every value of these types has already passed validation.

use serde::Serialize;
use std::fmt;

/// A single validated question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    prompt: String,
    answer: String,
}

impl QuestionRecord {
    /// Both fields must already be trimmed and non-empty.
    pub(crate) fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        let record = Self {
            prompt: prompt.into(),
            answer: answer.into(),
        };
        debug_assert!(!record.prompt.is_empty() && !record.answer.is_empty());
        record
    }

    /// The question text shown to the player.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The expected answer.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Whether `text` answers this question: surrounding whitespace is ignored
    /// and letters compare case-insensitively.
    pub fn accepts(&self, text: &str) -> bool {
        let given = text.trim();
        given == self.answer || given.to_lowercase() == self.answer.to_lowercase()
    }
}

/// An ordered, validated set of questions available to one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    records: Vec<QuestionRecord>,
}

impl QuestionBank {
    pub(crate) fn from_records(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuestionRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a QuestionRecord;
    type IntoIter = std::slice::Iter<'a, QuestionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Lifecycle phase of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Running => write!(f, "running"),
            Phase::Finished => write!(f, "finished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ignores_case_and_whitespace() {
        let record = QuestionRecord::new("Capital of France", "Paris");
        assert!(record.accepts(" Paris "));
        assert!(record.accepts("paris"));
        assert!(record.accepts("PARIS\t"));
        assert!(!record.accepts("London"));
        assert!(!record.accepts(""));
        assert!(!record.accepts("   "));
    }

    #[test]
    fn accepts_non_ascii_case_folding() {
        let record = QuestionRecord::new("Largest city in Turkey", "İstanbul");
        assert!(record.accepts("İSTANBUL"));
        let record = QuestionRecord::new("Capital of Iceland", "Reykjavík");
        assert!(record.accepts("REYKJAVÍK"));
        assert!(!record.accepts("Reykjavik"));
    }

    #[test]
    fn phase_display_and_default() {
        assert_eq!(Phase::default(), Phase::Idle);
        assert_eq!(Phase::Running.to_string(), "running");
        assert_eq!(Phase::Finished.to_string(), "finished");
    }

    #[test]
    fn phase_serializes_lowercase() {
        let json = serde_json::to_string(&Phase::Finished).unwrap();
        assert_eq!(json, "\"finished\"");
    }

    #[test]
    fn bank_accessors() {
        let bank = QuestionBank::from_records(vec![
            QuestionRecord::new("2+2", "4"),
            QuestionRecord::new("3+3", "6"),
        ]);
        assert_eq!(bank.len(), 2);
        assert!(!bank.is_empty());
        assert_eq!(bank.get(1).unwrap().answer(), "6");
        assert!(bank.get(2).is_none());
        let prompts: Vec<&str> = bank.iter().map(QuestionRecord::prompt).collect();
        assert_eq!(prompts, vec!["2+2", "3+3"]);
        assert!(QuestionBank::default().is_empty());
    }
}
