//! Quiz session engine.
//!
//! Owns one session's state and exposes the commands a presentation layer
//! drives: [`start`](QuizEngine::start), [`submit_answer`](QuizEngine::submit_answer)
//! and [`tick`](QuizEngine::tick). All calls are expected from a single
//! control thread; the engine takes `&mut self` and holds no locks.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

use crate::clock::{Clock, Stopwatch, SystemClock};
use crate::error::EmptyBankError;
use crate::model::{Phase, QuestionBank, QuestionRecord};
use crate::summary::SessionSummary;

/// Display text while no session has been started.
pub const IDLE_MESSAGE: &str = "Press start to begin.";

/// Mutable state of the current session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    phase: Phase,
    order: Vec<usize>,
    cursor: usize,
    score: usize,
    missed: Vec<QuestionRecord>,
    stopwatch: Stopwatch,
}

impl SessionState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Bank indices in the order this session asks them.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Index into [`order`](Self::order) of the next unanswered question.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn missed(&self) -> &[QuestionRecord] {
        &self.missed
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.stopwatch.seconds()
    }

    fn reset(&mut self, order: Vec<usize>) {
        self.phase = Phase::Running;
        self.order = order;
        self.cursor = 0;
        self.score = 0;
        self.missed.clear();
    }
}

/// Returned by a successful [`QuizEngine::start`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ready {
    pub first_prompt: String,
    pub total: usize,
}

/// Everything a presentation layer needs to render after an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitOutcome {
    pub correct: bool,
    pub score: usize,
    pub total: usize,
    pub phase: Phase,
    /// Answer to the question just submitted.
    pub expected_answer: String,
    /// Prompt of the next question while the session is still running.
    pub next_prompt: Option<String>,
    /// Present once the last question has been answered.
    pub summary: Option<SessionSummary>,
}

/// The quiz session engine.
pub struct QuizEngine<C: Clock = SystemClock> {
    bank: QuestionBank,
    state: SessionState,
    last_summary: Option<SessionSummary>,
    rng: StdRng,
    clock: C,
}

impl QuizEngine<SystemClock> {
    /// Engine over `bank` using real time and an OS-seeded shuffle.
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            state: SessionState::default(),
            last_summary: None,
            rng: StdRng::from_os_rng(),
            clock: SystemClock::new(),
        }
    }
}

impl<C: Clock> QuizEngine<C> {
    /// Use a fixed seed so question order is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replace the time source.
    pub fn with_clock<D: Clock>(self, clock: D) -> QuizEngine<D> {
        QuizEngine {
            bank: self.bank,
            state: self.state,
            last_summary: self.last_summary,
            rng: self.rng,
            clock,
        }
    }

    /// Begin a new session, discarding any previous one.
    ///
    /// Draws a fresh uniformly random question order and restarts the timer.
    pub fn start(&mut self) -> Result<Ready, EmptyBankError> {
        if self.bank.is_empty() {
            tracing::debug!("start requested with an empty question bank");
            self.state = SessionState::default();
            return Err(EmptyBankError);
        }

        let mut order: Vec<usize> = (0..self.bank.len()).collect();
        order.shuffle(&mut self.rng);

        self.state.reset(order);
        self.state.stopwatch.start(self.clock.now());
        tracing::debug!("session started with {} questions", self.bank.len());

        Ok(Ready {
            first_prompt: self.current_prompt().unwrap_or_default().to_string(),
            total: self.total(),
        })
    }

    /// Evaluate `text` against the current question.
    ///
    /// Returns `None` without touching any state unless a session is running.
    pub fn submit_answer(&mut self, text: &str) -> Option<SubmitOutcome> {
        if self.state.phase != Phase::Running {
            tracing::debug!("ignoring answer while {}", self.state.phase);
            return None;
        }

        let index = *self.state.order.get(self.state.cursor)?;
        let record = self.bank.get(index)?;
        let correct = record.accepts(text);
        let expected_answer = record.answer().to_string();

        if correct {
            self.state.score += 1;
        } else {
            self.state.missed.push(record.clone());
        }
        self.state.cursor += 1;
        debug_assert_eq!(
            self.state.score + self.state.missed.len(),
            self.state.cursor
        );

        let summary = if self.state.cursor == self.state.order.len() {
            Some(self.finish())
        } else {
            None
        };

        Some(SubmitOutcome {
            correct,
            score: self.state.score,
            total: self.total(),
            phase: self.state.phase,
            expected_answer,
            next_prompt: self.current_prompt().map(str::to_string),
            summary,
        })
    }

    /// Account elapsed whole seconds. Only has an effect while running.
    pub fn tick(&mut self) {
        if self.state.phase == Phase::Running {
            self.state.stopwatch.settle(self.clock.now());
        }
    }

    /// Display text for the current phase: the prompt, the idle message, or
    /// the session summary.
    pub fn current_question(&self) -> String {
        match self.state.phase {
            Phase::Idle => IDLE_MESSAGE.to_string(),
            Phase::Running => self.current_prompt().unwrap_or_default().to_string(),
            Phase::Finished => match &self.last_summary {
                Some(summary) => summary.to_string(),
                None => IDLE_MESSAGE.to_string(),
            },
        }
    }

    /// The record being asked, while running.
    pub fn current_record(&self) -> Option<&QuestionRecord> {
        if self.state.phase != Phase::Running {
            return None;
        }
        let index = *self.state.order.get(self.state.cursor)?;
        self.bank.get(index)
    }

    fn current_prompt(&self) -> Option<&str> {
        self.current_record().map(QuestionRecord::prompt)
    }

    fn finish(&mut self) -> SessionSummary {
        self.state.stopwatch.stop(self.clock.now());
        self.state.phase = Phase::Finished;

        let summary = SessionSummary {
            score: self.state.score,
            total: self.total(),
            elapsed_seconds: self.state.stopwatch.seconds(),
            missed: self.state.missed.clone(),
        };
        tracing::info!(
            "quiz finished: {}/{} correct in {}s",
            summary.score,
            summary.total,
            summary.elapsed_seconds
        );
        self.last_summary = Some(summary.clone());
        summary
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn score(&self) -> usize {
        self.state.score
    }

    /// Number of questions in a session.
    pub fn total(&self) -> usize {
        self.bank.len()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.state.elapsed_seconds()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Summary of the most recently finished session, kept until the next
    /// session finishes.
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.last_summary.as_ref()
    }
}
