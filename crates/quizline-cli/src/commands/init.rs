//! The `quizline init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizline.toml
    if std::path::Path::new("quizline.toml").exists() {
        println!("quizline.toml already exists, skipping.");
    } else {
        std::fs::write("quizline.toml", SAMPLE_CONFIG)?;
        println!("Created quizline.toml");
    }

    // Create starter question file
    std::fs::create_dir_all("questions")?;
    let questions_path = std::path::Path::new("questions/quiz.txt");
    if questions_path.exists() {
        println!("questions/quiz.txt already exists, skipping.");
    } else {
        std::fs::write(questions_path, SAMPLE_QUESTIONS)?;
        println!("Created questions/quiz.txt");
    }

    println!("\nNext steps:");
    println!("  1. Edit questions/quiz.txt (one PROMPT|ANSWER per line)");
    println!("  2. Run: quizline validate");
    println!("  3. Run: quizline play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizline configuration

questions = "questions/quiz.txt"
max_questions = 10
tick_interval_ms = 1000
"#;

const SAMPLE_QUESTIONS: &str = "\
What is the capital of France?|Paris
What is 7 times 8?|56
Which planet is known as the Red Planet?|Mars
What is the chemical symbol for gold?|Au
How many continents are there?|7
What is the largest ocean on Earth?|Pacific
Who wrote Romeo and Juliet?|Shakespeare
What is the boiling point of water in Celsius?|100
Which gas do plants absorb from the air?|Carbon dioxide
What is the square root of 81?|9
What is the smallest prime number?|2
Which language has the most native speakers?|Mandarin
";
