//! The `quizline validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use quizline_core::error::EmptyBankError;
use quizline_core::loader;

pub fn execute(
    questions: Option<PathBuf>,
    max: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = super::resolve_config(questions, max, config_path)?;

    let report = loader::load_file_with_report(&config.questions, config.max_questions)
        .context("cannot validate question file")?;

    println!(
        "Question file: {} ({} questions)",
        config.questions.display(),
        report.bank.len()
    );

    if !report.skipped.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Line", "Problem", "Content"]);
        for skipped in &report.skipped {
            table.add_row(vec![
                Cell::new(skipped.line_number),
                Cell::new(skipped.reason),
                Cell::new(&skipped.content),
            ]);
        }
        println!("\n{table}");
    }

    if report.truncated {
        println!(
            "\nStopped after {} questions; remaining lines were not read.",
            config.max_questions
        );
    }

    anyhow::ensure!(!report.bank.is_empty(), EmptyBankError);

    if report.skipped.is_empty() {
        println!("All questions valid.");
    } else {
        println!("\n{} line(s) skipped.", report.skipped.len());
    }

    Ok(())
}
