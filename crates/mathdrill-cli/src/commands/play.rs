//! The `mathdrill play` command.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::io::BufReader;

use mathdrill_core::error::ValidationError;
use mathdrill_core::generator::rng_from_optional_seed;
use mathdrill_core::model::Question;
use mathdrill_core::report::SessionReport;
use mathdrill_core::session::GradeOutcome;
use mathdrill_core::store::ConfigStore;
use mathdrill_report::{render, ReportFormat};
use mathdrill_runner::{LineInput, QuizPresenter, QuizRunner};

use crate::commands::QuizArgs;
use crate::config::load_config_from;

/// Console presenter: questions and feedback on stdout.
struct ConsolePresenter;

impl ConsolePresenter {
    fn prompt(&self) {
        print!("> ");
        let _ = std::io::stdout().flush();
    }
}

impl QuizPresenter for ConsolePresenter {
    fn question(&mut self, index: usize, total: usize, question: &Question) {
        let progress = index as f64 / total as f64 * 100.0;
        println!("\nQuestion {} of {} ({progress:.0}%)", index + 1, total);
        println!("{} = ?", question.text);
        self.prompt();
    }

    fn tick(&mut self, remaining: u32) {
        if remaining % 10 == 0 || remaining <= 3 {
            println!("\n  {remaining}s left");
            self.prompt();
        }
    }

    fn invalid_input(&mut self, error: &ValidationError) {
        println!("  {error}");
        self.prompt();
    }

    fn feedback(&mut self, outcome: &GradeOutcome) {
        println!("  {}", outcome.feedback.message());
    }

    fn awaiting_continue(&mut self, is_last: bool) {
        if is_last {
            println!("Press Enter to see your results");
        } else {
            println!("Press Enter for the next question");
        }
    }
}

pub async fn execute(
    quiz: QuizArgs,
    seed: Option<u64>,
    report_path: Option<PathBuf>,
    format: String,
    config_path: Option<&Path>,
) -> Result<()> {
    let format: ReportFormat = format.parse().map_err(anyhow::Error::msg)?;
    let app = load_config_from(config_path)?;
    let store = app.config_store();

    let mut config = app.quiz_config(&store);
    quiz.apply(&mut config)?;
    config.validate()?;
    store.save(&config)?;

    let mut rng = rng_from_optional_seed(seed.or(app.seed));
    let mut runner = QuizRunner::new(config.clone());
    let total = runner.start(&mut rng)?;
    println!(
        "{total} {} questions, type your answer and press Enter.",
        config.difficulty
    );

    let mut input = LineInput::new(BufReader::new(tokio::io::stdin()));
    let Some(finished) = runner.run(&mut input, &mut ConsolePresenter).await? else {
        eprintln!("\nQuiz abandoned.");
        return Ok(());
    };

    let report = SessionReport::new(config, &finished);
    println!();
    print!("{}", render(&report, format)?);

    let save_to = report_path.or_else(|| {
        app.report_dir
            .as_ref()
            .map(|dir| dir.join(report.default_file_name()))
    });
    if let Some(path) = save_to {
        report.save_json(&path)?;
        eprintln!("Report saved to {}", path.display());
    }

    Ok(())
}
