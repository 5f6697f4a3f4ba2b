//! End-of-session summary.

use std::fmt;

use serde::Serialize;

use crate::model::QuestionRecord;

/// Shown instead of the missed list after a perfect run.
pub const PERFECT_MESSAGE: &str = "Great job! You got everything right!";

/// Results of one finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub score: usize,
    pub total: usize,
    pub elapsed_seconds: u64,
    /// Incorrectly answered questions, in the order they were asked.
    pub missed: Vec<QuestionRecord>,
}

impl SessionSummary {
    /// Fraction of questions answered correctly, `0.0` for an empty session.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f64 / self.total as f64
    }

    pub fn is_perfect(&self) -> bool {
        self.missed.is_empty()
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quiz Over! Your score: {}/{}", self.score, self.total)?;
        writeln!(f, "Time: {}", self.elapsed_seconds)?;
        if self.missed.is_empty() {
            return write!(f, "{PERFECT_MESSAGE}");
        }
        write!(f, "Missed Questions:")?;
        for record in &self.missed {
            write!(f, "\n\nQ: {}\nA: {}", record.prompt(), record.answer())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(score: usize, missed: Vec<QuestionRecord>) -> SessionSummary {
        SessionSummary {
            score,
            total: score + missed.len(),
            elapsed_seconds: 42,
            missed,
        }
    }

    #[test]
    fn perfect_run_text() {
        let text = summary(3, vec![]).to_string();
        assert_eq!(
            text,
            "Quiz Over! Your score: 3/3\nTime: 42\nGreat job! You got everything right!"
        );
    }

    #[test]
    fn missed_questions_text() {
        let text = summary(
            1,
            vec![
                QuestionRecord::new("Capital of France", "Paris"),
                QuestionRecord::new("Largest planet", "Jupiter"),
            ],
        )
        .to_string();
        assert_eq!(
            text,
            "Quiz Over! Your score: 1/3\nTime: 42\nMissed Questions:\n\n\
             Q: Capital of France\nA: Paris\n\n\
             Q: Largest planet\nA: Jupiter"
        );
    }

    #[test]
    fn accuracy() {
        assert_eq!(summary(0, vec![]).accuracy(), 0.0);
        let half = summary(1, vec![QuestionRecord::new("q", "a")]);
        assert!((half.accuracy() - 0.5).abs() < f64::EPSILON);
        assert!(!half.is_perfect());
    }

    #[test]
    fn serializes_to_json() {
        let s = summary(1, vec![QuestionRecord::new("Capital of France", "Paris")]);
        let json: serde_json::Value = serde_json::to_value(&s).unwrap();
        assert_eq!(json["score"], 1);
        assert_eq!(json["total"], 2);
        assert_eq!(json["elapsed_seconds"], 42);
        assert_eq!(json["missed"][0]["prompt"], "Capital of France");
        assert_eq!(json["missed"][0]["answer"], "Paris");
    }
}
