//! The `mathdrill generate` command.

use std::path::Path;

use anyhow::Result;

use mathdrill_core::generator::{generate_for_config, rng_from_optional_seed};

use crate::commands::QuizArgs;
use crate::config::load_config_from;

pub fn execute(
    quiz: QuizArgs,
    seed: Option<u64>,
    json: bool,
    answers: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let app = load_config_from(config_path)?;
    let mut config = app.quiz_config(&app.config_store());
    quiz.apply(&mut config)?;

    let mut rng = rng_from_optional_seed(seed.or(app.seed));
    let questions = generate_for_config(&mut rng, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }

    let width = questions.len().to_string().len();
    for (i, q) in questions.iter().enumerate() {
        if answers {
            println!("{:>width$}. {} = {}", i + 1, q.text, q.correct_answer);
        } else {
            println!("{:>width$}. {}", i + 1, q.text);
        }
    }

    Ok(())
}
