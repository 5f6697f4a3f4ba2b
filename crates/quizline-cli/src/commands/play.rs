//! The `quizline play` command.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Split};
use tokio::time::MissedTickBehavior;

use quizline_core::clock::Clock;
use quizline_core::engine::QuizEngine;
use quizline_core::loader;
use quizline_core::summary::SessionSummary;

pub async fn execute(
    questions: Option<PathBuf>,
    max: Option<usize>,
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    format: String,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json"),
        "unknown format '{format}' (expected text or json)"
    );

    let config = super::resolve_config(questions, max, config_path)?;
    let bank = loader::load_file(&config.questions, config.max_questions);

    let mut engine = QuizEngine::new(bank);
    if let Some(seed) = seed {
        engine = engine.with_seed(seed);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).split(b'\n');
    let mut ticker = tokio::time::interval(Duration::from_millis(config.tick_interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let ready = engine.start()?;
        println!("Score: 0/{}", ready.total);
        print_prompt(&engine, &ready.first_prompt);

        let summary = loop {
            tokio::select! {
                _ = ticker.tick() => engine.tick(),
                line = lines.next_segment() => {
                    let Some(text) = line?.map(decode_line) else {
                        break None;
                    };
                    engine.tick();
                    let Some(outcome) = engine.submit_answer(&text) else {
                        continue;
                    };

                    if outcome.correct {
                        println!("Correct!");
                    } else {
                        println!("Wrong! The answer was: {}", outcome.expected_answer);
                    }
                    println!("Score: {}/{}", outcome.score, outcome.total);

                    match (outcome.summary, outcome.next_prompt) {
                        (Some(summary), _) => break Some(summary),
                        (None, Some(prompt)) => print_prompt(&engine, &prompt),
                        (None, None) => {}
                    }
                }
            }
        };

        let Some(summary) = summary else {
            println!();
            println!("Quiz abandoned.");
            return Ok(());
        };

        println!();
        print_summary(&engine, &summary, &format)?;

        print!("\nPlay again? [y/N] ");
        std::io::stdout().flush()?;
        match next_line(&mut lines).await? {
            Some(reply) if matches!(reply.trim().to_lowercase().as_str(), "y" | "yes") => {
                println!();
            }
            _ => {
                println!();
                return Ok(());
            }
        }
    }
}

/// Decode one raw stdin line. Invalid UTF-8 is replaced rather than
/// rejected, so a stray byte sequence becomes a wrong answer.
fn decode_line(bytes: Vec<u8>) -> String {
    let mut line = match String::from_utf8(bytes) {
        Ok(line) => line,
        Err(e) => {
            tracing::warn!("answer is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    if line.ends_with('\r') {
        line.pop();
    }
    line
}

async fn next_line<R: AsyncBufRead + Unpin>(lines: &mut Split<R>) -> Result<Option<String>> {
    Ok(lines.next_segment().await?.map(decode_line))
}

fn print_prompt<C: Clock>(engine: &QuizEngine<C>, prompt: &str) {
    let number = engine.state().cursor() + 1;
    println!(
        "\n[{number}/{} | {}s] {prompt}",
        engine.total(),
        engine.elapsed_seconds()
    );
}

fn print_summary<C: Clock>(
    engine: &QuizEngine<C>,
    summary: &SessionSummary,
    format: &str,
) -> Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(summary)?),
        _ => println!("{}", engine.current_question()),
    }
    Ok(())
}
