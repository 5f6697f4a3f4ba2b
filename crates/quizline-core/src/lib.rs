//! quizline-core — Question bank loader and quiz session engine.
//!
//! This crate holds all of quizline's decision logic. Front ends build a
//! [`QuestionBank`](model::QuestionBank) with the [`loader`], hand it to a
//! [`QuizEngine`](engine::QuizEngine), and render what the engine reports.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod summary;
